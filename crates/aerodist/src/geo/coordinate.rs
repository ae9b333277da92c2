//! A point on the sphere.

use super::central_angle;

/// Radians per degree.
const RADIANS_PER_DEGREE: f64 = core::f64::consts::PI / 180.0;

/// A latitude and longitude pair, both in radians.
///
/// The values are not range-checked. A latitude outside `[-π/2, π/2]` or a
/// longitude outside `[-π, π]` still maps to some point on the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Latitude in radians, positive north.
    pub latitude: f64,
    /// Longitude in radians, positive east.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new `Coordinate` from radians.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a new `Coordinate` from degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use aerodist::Coordinate;
    ///
    /// let c = Coordinate::from_degrees(90.0, -180.0);
    /// assert!((c.latitude - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
    /// assert!((c.longitude + core::f64::consts::PI).abs() < 1e-15);
    /// ```
    #[must_use]
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude * RADIANS_PER_DEGREE, longitude * RADIANS_PER_DEGREE)
    }

    /// The central angle, in radians, between `self` and `other`.
    ///
    /// See [`central_angle`].
    ///
    /// # Examples
    ///
    /// ```
    /// use aerodist::Coordinate;
    ///
    /// // London Heathrow and New York JFK
    /// let lhr = Coordinate::from_degrees(51.4700, -0.4543);
    /// let jfk = Coordinate::from_degrees(40.6413, -73.7781);
    ///
    /// let nm = aerodist::rad_to_dist(lhr.angle_to(&jfk));
    /// assert!((nm - 2989.35).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        central_angle(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
