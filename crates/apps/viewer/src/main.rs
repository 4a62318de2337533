use std::env;

use foundation::camera::CameraPose;
use foundation::geo::LngLat;
use map::engine::{Cursor, MapEngine};
use map::layers::{LayerDefinition, LayerId};
use map::popup::PopupController;
use map::registry::LayerRegistry;
use map::surface::MapSurface;
use story::orchestrator::{Orchestrator, StoryView};
use story::scenes::{
    study_spot_layers, study_spot_scenes, INITIAL_CAMERA, SPOTS_POINTS, SPOTS_QUIET,
};
use story::steps::StepDriver;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Headless stand-in for the rendering engine: tracks layer membership and
/// logs every call it receives.
struct LogEngine {
    layers: Vec<LayerId>,
}

impl LogEngine {
    fn new(access_token: Option<String>) -> Self {
        match access_token {
            Some(token) if !token.is_empty() => {
                info!(token_len = token.len(), "map engine configured with access token")
            }
            _ => warn!("no STORY_MAP_TOKEN set; tile requests would fail against a real engine"),
        }
        Self { layers: Vec::new() }
    }
}

impl MapEngine for LogEngine {
    fn add_layer(&mut self, definition: &LayerDefinition) {
        self.layers.push(definition.id);
        info!(layer = %definition.id, "layer added");
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.layers.retain(|l| *l != id);
        info!(layer = %id, "layer removed");
    }

    fn has_layer(&self, id: LayerId) -> bool {
        self.layers.contains(&id)
    }

    fn fly_to(&mut self, target: CameraPose, speed: f64) {
        info!(
            lng = target.center.lng,
            lat = target.center.lat,
            zoom = target.zoom,
            pitch = target.pitch_deg,
            speed,
            "camera transition"
        );
    }

    fn resize(&mut self) {
        info!("viewport resized");
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        info!(?cursor, "cursor changed");
    }

    fn show_popup(&mut self, anchor: LngLat, text: String) {
        info!(lng = anchor.lng, lat = anchor.lat, "popup:\n{text}");
    }
}

/// Headless page: logs HUD/cover/scene changes instead of touching a DOM.
struct LogView {
    scene_count: usize,
}

impl StoryView for LogView {
    fn scene_count(&self) -> usize {
        self.scene_count
    }

    fn set_active_scene(&mut self, index: usize) {
        info!(scene = index, "scene activated");
    }

    fn set_cover_visible(&mut self, visible: bool) {
        info!(visible, "cover overlay");
    }

    fn set_hud(&mut self, text: &str) {
        info!(hud = text, "HUD updated");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_url = env::var("STORY_DATA_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080/data/studyspots.geojson".to_string());
    let access_token = env::var("STORY_MAP_TOKEN").ok();

    // The map comes up before the data arrives, exactly like the page: a
    // failed fetch leaves it interactive but dataless.
    let surface = MapSurface::new(LogEngine::new(access_token), INITIAL_CAMERA);
    let registry = LayerRegistry::new(study_spot_layers());

    let mut popups = PopupController::new();
    for layer in [SPOTS_POINTS, SPOTS_QUIET] {
        if let Err(err) = popups.attach(&registry, layer) {
            error!("startup aborted: {err}");
            std::process::exit(1);
        }
    }

    let scenes = study_spot_scenes();
    let mut orchestrator = match Orchestrator::new(
        surface,
        registry,
        LogView {
            scene_count: scenes.len(),
        },
        scenes,
    ) {
        Ok(o) => o,
        Err(err) => {
            error!("startup aborted: {err}");
            std::process::exit(1);
        }
    };
    orchestrator.surface_mut().resize();

    // One-shot fetch. A failure ends the startup sequence with no retries
    // and no fallback dataset; no layer is ever registered.
    let client = reqwest::Client::new();
    let spots = match data::load(&client, &data_url).await {
        Ok(spots) => spots,
        Err(err) => {
            error!("data fetch failed: {err}; map stays up without layers");
            return;
        }
    };

    // Scripted walkthrough standing in for a reader: down through all four
    // scenes, a click on the first quiet spot, then back up past the cover.
    let mut driver = StepDriver::new(
        StepDriver::even_bands(4, 400.0, 600.0),
        800.0,
        StepDriver::DEFAULT_OFFSET,
    )
    .expect("reference step layout is valid");

    let path = [200.0, 800.0, 1400.0, 2000.0, 1400.0, 800.0, 200.0, 0.0];
    for y in path {
        for event in driver.scroll(y) {
            if let Err(err) = orchestrator.handle(event) {
                error!("step event dropped: {err}");
            }
        }
        orchestrator.surface_mut().complete_transition();

        if driver.active() == Some(2) {
            if let Some(quiet) = spots
                .features()
                .iter()
                .find(|f| f.noise == data::NoiseLevel::Quiet)
            {
                let at = quiet.location;
                let (registry, source) = (orchestrator.registry().clone(), &spots);
                popups.handle_hover(
                    &registry,
                    orchestrator.surface_mut().engine_mut(),
                    source,
                    Some(at),
                );
                popups.handle_click(&registry, orchestrator.surface_mut().engine_mut(), source, at);
                popups.handle_hover(&registry, orchestrator.surface_mut().engine_mut(), source, None);
            }
        }
    }

    info!(
        camera_zoom = orchestrator.surface().camera().zoom,
        "walkthrough complete"
    );
}
