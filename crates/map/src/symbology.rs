use data::feature::NoiseLevel;

/// CSS-style hex color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub &'static str);

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// How a circle layer colors its features.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorRule {
    Fixed(Color),
    /// Per-noise-category match.
    ByNoise {
        quiet: Color,
        mixed: Color,
        social: Color,
        other: Color,
    },
}

impl ColorRule {
    pub fn resolve(&self, noise: NoiseLevel) -> Color {
        match *self {
            ColorRule::Fixed(c) => c,
            ColorRule::ByNoise {
                quiet,
                mixed,
                social,
                other,
            } => match noise {
                NoiseLevel::Quiet => quiet,
                NoiseLevel::Mixed => mixed,
                NoiseLevel::Social => social,
                NoiseLevel::Other => other,
            },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleStyle {
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub color: ColorRule,
    pub opacity: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeatmapStyle {
    pub intensity: f64,
    pub radius: f64,
    pub opacity: f64,
    /// Above this zoom the heatmap fades out entirely.
    pub max_zoom: Option<f64>,
}
