//! Conversions between angular distance and nautical miles.
//!
//! One minute of arc along a great circle is one nautical mile, so a half
//! circle of `π` radians is `180 * 60 = 10800` nautical miles.

use core::f64::consts::PI;

use crate::geo::central_angle;

/// Nautical miles in a half great circle.
pub const NM_PER_HALF_CIRCLE: f64 = 10800.0;

/// Nautical miles per radian of arc, `10800 / π`.
pub const NM_PER_RADIAN: f64 = NM_PER_HALF_CIRCLE / PI;

/// Converts an angular distance in radians to nautical miles.
///
/// # Examples
///
/// ```
/// use aerodist::units::rad_to_dist;
///
/// assert_eq!(rad_to_dist(0.0), 0.0);
/// assert!((rad_to_dist(core::f64::consts::PI) - 10800.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn rad_to_dist(rad: f64) -> f64 {
    rad * NM_PER_HALF_CIRCLE / PI
}

/// Converts a distance in nautical miles to an angular distance in radians.
///
/// This is the inverse of [`rad_to_dist`] up to rounding.
///
/// # Examples
///
/// ```
/// use aerodist::units::{dist_to_rad, rad_to_dist};
///
/// assert_eq!(dist_to_rad(0.0), 0.0);
/// assert!((dist_to_rad(rad_to_dist(1.25)) - 1.25).abs() < 1e-9);
/// ```
#[must_use]
pub fn dist_to_rad(dist: f64) -> f64 {
    dist * PI / NM_PER_HALF_CIRCLE
}

/// The great-circle distance, in nautical miles, between two points given as
/// latitude and longitude in radians.
///
/// This is [`central_angle`] followed by [`rad_to_dist`].
#[must_use]
pub fn great_circle_distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    rad_to_dist(central_angle(lat_a, lon_a, lat_b, lon_b))
}
