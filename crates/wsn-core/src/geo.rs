//! Geographic position type and the simulator's distance metric.

/// Kilometres per degree of latitude used by [`Position::distance_km`].
pub const KM_PER_DEGREE: f64 = 111.0;

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Approximate planar distance in kilometres.
    ///
    /// One degree of latitude is taken as 111 km and longitude degrees are
    /// scaled by `cos(self.lat)`.  The scale factor uses the latitude of
    /// `self` only, so `a.distance_km(b)` and `b.distance_km(a)` can differ
    /// slightly when the two points sit at different latitudes.  That is fine
    /// for nearest-neighbour ranking and cost scaling over a few kilometres;
    /// do not report it as a true geodesic distance.
    pub fn distance_km(self, other: Position) -> f64 {
        let d_lat = (other.lat - self.lat) * KM_PER_DEGREE;
        let d_lon = (other.lon - self.lon) * KM_PER_DEGREE * self.lat.to_radians().cos();
        d_lat.hypot(d_lon)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
