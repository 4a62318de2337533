use data::feature::NoiseLevel;
use foundation::camera::CameraPose;
use foundation::geo::LngLat;
use map::layers::{FeatureFilter, LayerDefinition, LayerId, Paint};
use map::symbology::{CircleStyle, Color, ColorRule, HeatmapStyle};

pub const SPOTS_SOURCE: &str = "studyspots";

pub const SPOTS_POINTS: LayerId = LayerId("spots-points");
pub const SPOTS_HEAT: LayerId = LayerId("spots-heat");
pub const SPOTS_QUIET: LayerId = LayerId("spots-quiet");

/// HUD label shown while the cover overlay is up.
pub const COVER_HUD: &str = "Cover";

/// Camera before any scene is entered; matches scene 0 so the first
/// transition is a no-op visually.
pub const INITIAL_CAMERA: CameraPose =
    CameraPose::new(LngLat::new(-122.309, 47.656), 14.3, 0.0);

const FLY_SPEED: f64 = 0.6;

/// What one narrative step does to the map.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub active_layers: &'static [LayerId],
    pub camera: CameraPose,
    pub fly_speed: f64,
    pub hud: &'static str,
}

/// The three visual encodings of the study spot source.
pub fn study_spot_layers() -> Vec<LayerDefinition> {
    let points = LayerDefinition {
        id: SPOTS_POINTS,
        source: SPOTS_SOURCE,
        paint: Paint::Circle(CircleStyle {
            radius: 7.0,
            stroke_width: 2.0,
            stroke_color: Color("#ffffff"),
            color: ColorRule::ByNoise {
                quiet: Color("#4c78a8"),
                mixed: Color("#f58518"),
                social: Color("#e45756"),
                other: Color("#72b7b2"),
            },
            opacity: 0.9,
        }),
        filter: FeatureFilter::All,
    };

    let heat = LayerDefinition {
        id: SPOTS_HEAT,
        source: SPOTS_SOURCE,
        paint: Paint::Heatmap(HeatmapStyle {
            intensity: 1.1,
            radius: 35.0,
            opacity: 0.85,
            max_zoom: Some(17.0),
        }),
        filter: FeatureFilter::All,
    };

    let quiet = LayerDefinition {
        id: SPOTS_QUIET,
        source: SPOTS_SOURCE,
        paint: Paint::Circle(CircleStyle {
            radius: 10.0,
            stroke_width: 2.0,
            stroke_color: Color("#000000"),
            color: ColorRule::Fixed(Color("#2ca02c")),
            opacity: 0.9,
        }),
        filter: FeatureFilter::NoiseEquals(NoiseLevel::Quiet),
    };

    vec![points, heat, quiet]
}

/// The fixed scene table: one entry per narrative step, in step order.
pub fn study_spot_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            active_layers: &[SPOTS_POINTS],
            camera: CameraPose::new(LngLat::new(-122.309, 47.656), 14.3, 0.0),
            fly_speed: FLY_SPEED,
            hud: "Points (all study spots)",
        },
        SceneConfig {
            active_layers: &[SPOTS_HEAT],
            camera: CameraPose::new(LngLat::new(-122.309, 47.656), 14.0, 0.0),
            fly_speed: FLY_SPEED,
            hud: "Heatmap (concentration)",
        },
        SceneConfig {
            active_layers: &[SPOTS_QUIET],
            camera: CameraPose::new(LngLat::new(-122.3088, 47.6562), 15.0, 0.0),
            fly_speed: FLY_SPEED,
            hud: "Quiet spots (filtered)",
        },
        SceneConfig {
            active_layers: &[SPOTS_POINTS],
            camera: CameraPose::new(LngLat::new(-122.3083, 47.6558), 15.4, 25.0),
            fly_speed: FLY_SPEED,
            hud: "Recommendations view",
        },
    ]
}
