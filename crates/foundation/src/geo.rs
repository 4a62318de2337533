/// Geographic position in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Squared planar distance in degree space.
    ///
    /// Longitude is scaled by cos(latitude) so east-west and north-south
    /// offsets are comparable at the latitudes this is used for. Good enough
    /// for local hit-testing; not a geodesic.
    pub fn dist2_deg(self, other: LngLat) -> f64 {
        let mid_lat = 0.5 * (self.lat + other.lat);
        let dx = (self.lng - other.lng) * mid_lat.to_radians().cos();
        let dy = self.lat - other.lat;
        dx * dx + dy * dy
    }
}
