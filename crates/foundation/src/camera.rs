use crate::geo::LngLat;

/// A camera target: where the map should be looking.
///
/// The surface holds one of these as the single source of truth for the
/// current view; animated transitions move between poses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub center: LngLat,
    pub zoom: f64,
    pub pitch_deg: f64,
}

impl CameraPose {
    pub const fn new(center: LngLat, zoom: f64, pitch_deg: f64) -> Self {
        Self {
            center,
            zoom,
            pitch_deg,
        }
    }
}

/// An in-flight animated camera transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlyTo {
    pub target: CameraPose,
    /// Relative animation speed; higher is faster.
    pub speed: f64,
}

impl FlyTo {
    pub const fn new(target: CameraPose, speed: f64) -> Self {
        Self { target, speed }
    }
}
