//! Angular distances between points on a sphere.
//!
//! All angles are in radians. Nothing here converts from degrees implicitly;
//! use [`Coordinate::from_degrees`] when the source data is in degrees.
//!
//! # Potentially unexpected behaviors
//!
//! The inverse cosine is applied to the dot product of the two unit vectors
//! as computed. For nearly antipodal points, rounding may push that dot
//! product just outside `[-1, 1]`, in which case the result is `NaN`.

mod coordinate;

pub use coordinate::Coordinate;

/// Latitude of the north pole, in radians.
pub const NORTH_POLE: f64 = core::f64::consts::FRAC_PI_2;

/// Latitude of the south pole, in radians.
pub const SOUTH_POLE: f64 = -core::f64::consts::FRAC_PI_2;

/// Computes the central angle between two points on a unit sphere.
///
/// The points are given as latitude and longitude in radians. The result is
/// in radians and lies in `[0, π]`; multiply by a sphere's radius to get the
/// great-circle distance on that sphere.
///
/// Identical points, and two points that both sit exactly on the same pole,
/// are at distance zero without any trigonometry. Longitude is meaningless at
/// a pole, so the pole check ignores it. Both checks use exact equality.
///
/// Otherwise each point is mapped to a Cartesian vector with [`unit_vector`],
/// each vector is normalized by its magnitude, and the result is the inverse
/// cosine of their dot product.
///
/// # Arguments
///
/// * `lat_a`: Latitude of the first point.
/// * `lon_a`: Longitude of the first point.
/// * `lat_b`: Latitude of the second point.
/// * `lon_b`: Longitude of the second point.
///
/// # Examples
///
/// ```
/// use core::f64::consts::{FRAC_PI_2, PI};
///
/// use aerodist::geo::central_angle;
///
/// assert_eq!(central_angle(0.0, 0.0, 0.0, 0.0), 0.0);
/// assert_eq!(central_angle(FRAC_PI_2, 0.0, FRAC_PI_2, 1.5), 0.0);
///
/// let quarter = central_angle(0.0, 0.0, 0.0, FRAC_PI_2);
/// assert!((quarter - FRAC_PI_2).abs() < 1e-12);
///
/// let half = central_angle(0.0, 0.0, 0.0, PI);
/// assert!((half - PI).abs() < 1e-12);
/// ```
///
/// # References
///
/// * [Great-circle distance](https://en.wikipedia.org/wiki/Great-circle_distance)
#[must_use]
#[allow(clippy::float_cmp)]
pub fn central_angle(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    if lat_a == lat_b && lon_a == lon_b {
        return 0.0;
    }

    if (lat_a == NORTH_POLE && lat_b == NORTH_POLE) || (lat_a == SOUTH_POLE && lat_b == SOUTH_POLE) {
        return 0.0;
    }

    let a = normalized(unit_vector(lat_a, lon_a));
    let b = normalized(unit_vector(lat_b, lon_b));

    libm::acos(dot(&a, &b))
}

/// Maps a latitude and longitude, in radians, to a point on the unit sphere.
///
/// The axes are arranged so that `y` points at the north pole and `z` at the
/// intersection of the equator and the prime meridian:
///
/// * `x = sin(lon) * cos(lat)`
/// * `y = sin(lat)`
/// * `z = cos(lon) * cos(lat)`
///
/// # Examples
///
/// ```
/// use aerodist::geo::{unit_vector, NORTH_POLE};
///
/// assert_eq!(unit_vector(0.0, 0.0), [0.0, 0.0, 1.0]);
///
/// let [x, y, z] = unit_vector(NORTH_POLE, 0.0);
/// assert!(x.abs() < 1e-15 && (y - 1.0).abs() < 1e-15 && z.abs() < 1e-15);
/// ```
#[must_use]
pub fn unit_vector(lat: f64, lon: f64) -> [f64; 3] {
    let cos_lat = libm::cos(lat);
    [libm::sin(lon) * cos_lat, libm::sin(lat), libm::cos(lon) * cos_lat]
}

/// Scales a vector to unit length, absorbing rounding drift from the
/// trigonometric mapping.
fn normalized([x, y, z]: [f64; 3]) -> [f64; 3] {
    let magnitude = libm::sqrt(dot(&[x, y, z], &[x, y, z]));
    [x / magnitude, y / magnitude, z / magnitude]
}

/// Dot product of two 3-vectors.
fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::{dot, normalized};

    #[test]
    fn normalizing_keeps_direction() {
        let [x, y, z] = normalized([3.0, 0.0, 4.0]);
        assert!((x - 0.6).abs() < 1e-15);
        assert!(y.abs() < f64::EPSILON);
        assert!((z - 0.8).abs() < 1e-15);
    }

    #[test]
    fn orthogonal_axes() {
        assert!(dot(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).abs() < f64::EPSILON);
        assert!((dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]) - 32.0).abs() < f64::EPSILON);
    }
}
