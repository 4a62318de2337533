use foundation::camera::{CameraPose, FlyTo};

use crate::engine::MapEngine;

/// Wraps the rendering engine and owns the camera state.
///
/// Camera policy: `set_camera` starts an animated, interruptible transition.
/// A new call supersedes any in-flight transition rather than queuing, so
/// under rapid scene changes the latest target wins.
#[derive(Debug)]
pub struct MapSurface<E: MapEngine> {
    engine: E,
    camera: CameraPose,
    in_flight: Option<FlyTo>,
}

impl<E: MapEngine> MapSurface<E> {
    pub fn new(engine: E, initial: CameraPose) -> Self {
        Self {
            engine,
            camera: initial,
            in_flight: None,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The settled camera pose (not the in-flight target).
    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn in_flight(&self) -> Option<FlyTo> {
        self.in_flight
    }

    pub fn set_camera(&mut self, target: CameraPose, speed: f64) {
        self.in_flight = Some(FlyTo::new(target, speed));
        self.engine.fly_to(target, speed);
    }

    /// Commit the in-flight transition. The engine reports animation end out
    /// of band; callers invoke this when it does.
    pub fn complete_transition(&mut self) {
        if let Some(fly) = self.in_flight.take() {
            self.camera = fly.target;
        }
    }

    pub fn resize(&mut self) {
        self.engine.resize();
    }
}

#[cfg(test)]
mod tests {
    use foundation::camera::CameraPose;
    use foundation::geo::LngLat;

    use super::MapSurface;
    use crate::engine::{EngineAction, RecordingEngine};

    fn pose(zoom: f64) -> CameraPose {
        CameraPose::new(LngLat::new(-122.309, 47.656), zoom, 0.0)
    }

    #[test]
    fn set_camera_forwards_to_engine() {
        let mut surface = MapSurface::new(RecordingEngine::new(), pose(14.3));
        surface.set_camera(pose(15.0), 0.6);
        assert_eq!(
            surface.engine().actions(),
            &[EngineAction::FlyTo {
                target: pose(15.0),
                speed: 0.6
            }]
        );
    }

    #[test]
    fn later_transition_supersedes_earlier_one() {
        let mut surface = MapSurface::new(RecordingEngine::new(), pose(14.3));
        surface.set_camera(pose(15.0), 0.6);
        surface.set_camera(pose(15.4), 0.6);

        assert_eq!(surface.in_flight().unwrap().target, pose(15.4));
        surface.complete_transition();
        assert_eq!(surface.camera(), pose(15.4));
        assert!(surface.in_flight().is_none());
    }

    #[test]
    fn complete_without_in_flight_keeps_camera() {
        let mut surface = MapSurface::new(RecordingEngine::new(), pose(14.3));
        surface.complete_transition();
        assert_eq!(surface.camera(), pose(14.3));
    }

    #[test]
    fn resize_reaches_engine() {
        let mut surface = MapSurface::new(RecordingEngine::new(), pose(14.3));
        surface.resize();
        assert_eq!(surface.engine().actions(), &[EngineAction::Resize]);
    }
}
