use map::engine::MapEngine;
use map::registry::LayerRegistry;
use map::surface::MapSurface;
use tracing::info;

use crate::scenes::{COVER_HUD, SceneConfig};
use crate::steps::{Direction, StepEvent};

/// Seam to the narrative page: HUD text, cover overlay, active-scene
/// highlight.
pub trait StoryView {
    fn scene_count(&self) -> usize;
    /// Mark scene `index` active and every other scene inactive.
    fn set_active_scene(&mut self, index: usize);
    fn set_cover_visible(&mut self, visible: bool);
    fn set_hud(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The scene table does not match the page's scene elements.
    CountMismatch { scenes: usize, view: usize },
    /// A step event referenced an index outside the scene table.
    UnknownScene(usize),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::CountMismatch { scenes, view } => write!(
                f,
                "scene table has {scenes} entries but the page has {view} scenes"
            ),
            SceneError::UnknownScene(index) => write!(f, "no scene config for index {index}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Applies scene transitions to the map and the page.
///
/// One state per scene index plus an implicit cover state. Transitions are
/// driven exclusively by step events; the machine has no terminal state and
/// cycles as the reader scrolls.
#[derive(Debug)]
pub struct Orchestrator<E: MapEngine, V: StoryView> {
    surface: MapSurface<E>,
    registry: LayerRegistry,
    view: V,
    scenes: Vec<SceneConfig>,
}

impl<E: MapEngine, V: StoryView> Orchestrator<E, V> {
    /// Validates the scene table against the page up front, then puts the
    /// view into the cover state. No data layers are shown yet.
    pub fn new(
        surface: MapSurface<E>,
        registry: LayerRegistry,
        mut view: V,
        scenes: Vec<SceneConfig>,
    ) -> Result<Self, SceneError> {
        if scenes.len() != view.scene_count() {
            return Err(SceneError::CountMismatch {
                scenes: scenes.len(),
                view: view.scene_count(),
            });
        }
        view.set_cover_visible(true);
        view.set_hud(COVER_HUD);
        Ok(Self {
            surface,
            registry,
            view,
            scenes,
        })
    }

    pub fn surface(&self) -> &MapSurface<E> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut MapSurface<E> {
        &mut self.surface
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn handle(&mut self, event: StepEvent) -> Result<(), SceneError> {
        match event {
            StepEvent::Enter { index, .. } => self.enter(index),
            StepEvent::Exit {
                index: 0,
                direction: Direction::Up,
            } => {
                self.restore_cover();
                Ok(())
            }
            // Every other exit is handled by the enter of the next scene.
            StepEvent::Exit { .. } => Ok(()),
        }
    }

    fn enter(&mut self, index: usize) -> Result<(), SceneError> {
        let Some(config) = self.scenes.get(index) else {
            return Err(SceneError::UnknownScene(index));
        };
        info!(scene = index, hud = config.hud, "entering scene");

        self.view.set_active_scene(index);
        self.view.set_cover_visible(false);
        self.registry
            .apply(self.surface.engine_mut(), config.active_layers);
        self.surface.set_camera(config.camera, config.fly_speed);
        self.view.set_hud(config.hud);
        Ok(())
    }

    fn restore_cover(&mut self) {
        info!("scrolled back above the story; restoring cover");
        self.view.set_cover_visible(true);
        self.view.set_hud(COVER_HUD);
    }
}

/// In-memory page state, for tests and the headless viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingView {
    scene_count: usize,
    active: Option<usize>,
    cover_visible: bool,
    hud: String,
}

impl RecordingView {
    pub fn new(scene_count: usize) -> Self {
        Self {
            scene_count,
            active: None,
            cover_visible: true,
            hud: String::new(),
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn cover_visible(&self) -> bool {
        self.cover_visible
    }

    pub fn hud(&self) -> &str {
        &self.hud
    }
}

impl StoryView for RecordingView {
    fn scene_count(&self) -> usize {
        self.scene_count
    }

    fn set_active_scene(&mut self, index: usize) {
        self.active = Some(index);
    }

    fn set_cover_visible(&mut self, visible: bool) {
        self.cover_visible = visible;
    }

    fn set_hud(&mut self, text: &str) {
        self.hud = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use data::feature::{Feature, FeatureCollection, NoiseLevel};
    use foundation::geo::LngLat;
    use map::engine::RecordingEngine;
    use map::registry::LayerRegistry;
    use map::surface::MapSurface;

    use super::{Orchestrator, RecordingView, SceneError};
    use crate::scenes::{
        COVER_HUD, INITIAL_CAMERA, SPOTS_HEAT, SPOTS_POINTS, SPOTS_QUIET, study_spot_layers,
        study_spot_scenes,
    };
    use crate::steps::{Direction, StepEvent};

    type TestOrchestrator = Orchestrator<RecordingEngine, RecordingView>;

    fn orchestrator() -> TestOrchestrator {
        Orchestrator::new(
            MapSurface::new(RecordingEngine::new(), INITIAL_CAMERA),
            LayerRegistry::new(study_spot_layers()),
            RecordingView::new(4),
            study_spot_scenes(),
        )
        .unwrap()
    }

    fn enter(index: usize) -> StepEvent {
        StepEvent::Enter {
            index,
            direction: Direction::Down,
        }
    }

    #[test]
    fn starts_in_the_cover_state() {
        let o = orchestrator();
        assert!(o.view().cover_visible());
        assert_eq!(o.view().hud(), COVER_HUD);
        assert!(o.surface().engine().layers().is_empty());
    }

    #[test]
    fn rejects_a_scene_table_that_does_not_match_the_page() {
        let err = Orchestrator::new(
            MapSurface::new(RecordingEngine::new(), INITIAL_CAMERA),
            LayerRegistry::new(study_spot_layers()),
            RecordingView::new(5),
            study_spot_scenes(),
        )
        .unwrap_err();
        assert_eq!(err, SceneError::CountMismatch { scenes: 4, view: 5 });
    }

    #[test]
    fn each_scene_shows_exactly_its_layer() {
        let expected = [SPOTS_POINTS, SPOTS_HEAT, SPOTS_QUIET, SPOTS_POINTS];
        for (index, layer) in expected.into_iter().enumerate() {
            let mut o = orchestrator();
            o.handle(enter(index)).unwrap();
            assert_eq!(o.surface().engine().layers(), &[layer], "scene {index}");
        }
    }

    #[test]
    fn walking_the_story_keeps_one_layer_visible() {
        let mut o = orchestrator();
        for index in 0..4 {
            o.handle(enter(index)).unwrap();
            assert_eq!(o.surface().engine().layers().len(), 1, "scene {index}");
        }
    }

    #[test]
    fn entering_a_scene_hides_the_cover_and_sets_the_hud() {
        let mut o = orchestrator();
        o.handle(enter(1)).unwrap();
        assert!(!o.view().cover_visible());
        assert_eq!(o.view().active(), Some(1));
        assert_eq!(o.view().hud(), "Heatmap (concentration)");
    }

    #[test]
    fn entering_a_scene_flies_the_camera() {
        let mut o = orchestrator();
        o.handle(enter(3)).unwrap();
        let fly = o.surface().in_flight().unwrap();
        assert_eq!(fly.target, study_spot_scenes()[3].camera);
        assert_eq!(fly.speed, 0.6);
    }

    #[test]
    fn exit_zero_upward_restores_the_cover() {
        let mut o = orchestrator();
        o.handle(enter(0)).unwrap();
        assert!(!o.view().cover_visible());

        o.handle(StepEvent::Exit {
            index: 0,
            direction: Direction::Up,
        })
        .unwrap();
        assert!(o.view().cover_visible());
        assert_eq!(o.view().hud(), COVER_HUD);
    }

    #[test]
    fn exit_zero_downward_does_not_restore_the_cover() {
        let mut o = orchestrator();
        o.handle(enter(0)).unwrap();
        o.handle(StepEvent::Exit {
            index: 0,
            direction: Direction::Down,
        })
        .unwrap();
        assert!(!o.view().cover_visible());
    }

    #[test]
    fn other_exits_are_noops() {
        let mut o = orchestrator();
        o.handle(enter(2)).unwrap();
        let hud_before = o.view().hud().to_string();
        o.handle(StepEvent::Exit {
            index: 2,
            direction: Direction::Up,
        })
        .unwrap();
        assert_eq!(o.view().hud(), hud_before);
        assert!(!o.view().cover_visible());
    }

    #[test]
    fn unknown_scene_index_is_an_error_and_changes_nothing() {
        let mut o = orchestrator();
        o.handle(enter(1)).unwrap();
        let err = o.handle(enter(7)).unwrap_err();
        assert_eq!(err, SceneError::UnknownScene(7));
        assert_eq!(o.surface().engine().layers(), &[SPOTS_HEAT]);
        assert_eq!(o.view().hud(), "Heatmap (concentration)");
    }

    #[test]
    fn rapid_transitions_leave_the_latest_camera_target() {
        let mut o = orchestrator();
        o.handle(enter(1)).unwrap();
        o.handle(enter(2)).unwrap();
        let fly = o.surface().in_flight().unwrap();
        assert_eq!(fly.target, study_spot_scenes()[2].camera);
    }

    #[test]
    fn quiet_scene_renders_only_quiet_features() {
        fn spot(name: &str, noise: NoiseLevel) -> Feature {
            Feature {
                location: LngLat::new(-122.309, 47.656),
                name: name.to_string(),
                vibe: String::new(),
                best_for: String::new(),
                noise,
            }
        }
        let source = FeatureCollection::new(vec![
            spot("a", NoiseLevel::Quiet),
            spot("b", NoiseLevel::Mixed),
            spot("c", NoiseLevel::Social),
        ]);

        let mut o = orchestrator();
        o.handle(enter(2)).unwrap();
        assert_eq!(o.surface().engine().layers(), &[SPOTS_QUIET]);

        let rendered = o
            .registry()
            .definition(SPOTS_QUIET)
            .unwrap()
            .extract(&source);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].name, "a");
    }
}
