//! SQL wrappers for the spherical distance and unit conversions.

use rusqlite::Connection;

use crate::args::{self, Arguments};

/// Name and arity of the central-angle function.
pub const HAVERSINE: (&str, usize) = ("haversine", 4);

/// Name and arity of the radians-to-nautical-miles conversion.
pub const RAD_TO_DIST: (&str, usize) = ("radToDist", 1);

/// Name and arity of the nautical-miles-to-radians conversion.
pub const DIST_TO_RAD: (&str, usize) = ("distToRad", 1);

/// Register the geographic functions with the connection.
pub fn register(conn: &Connection) -> rusqlite::Result<()> {
    let flags = crate::flags();
    conn.create_scalar_function(HAVERSINE.0, crate::n_arg(HAVERSINE.1), flags, |ctx| Ok(haversine(ctx)))?;
    conn.create_scalar_function(RAD_TO_DIST.0, crate::n_arg(RAD_TO_DIST.1), flags, |ctx| Ok(rad_to_dist(ctx)))?;
    conn.create_scalar_function(DIST_TO_RAD.0, crate::n_arg(DIST_TO_RAD.1), flags, |ctx| Ok(dist_to_rad(ctx)))
}

/// `haversine(lat_a, lon_a, lat_b, lon_b) -> REAL`, the central angle in
/// radians between two points given in radians. NULL unless all four
/// arguments are REAL.
///
/// The angle is not clamped, so a nearly antipodal pair can produce NaN.
/// SQLite stores a NaN result as NULL, so such a call also reads back as
/// NULL.
pub fn haversine<A: Arguments + ?Sized>(args: &A) -> Option<f64> {
    let Some([lat_a, lon_a, lat_b, lon_b]) = args::reals::<4, _>(args) else {
        ftlog::debug!("{}: expected (Real, Real, Real, Real), got ({})", HAVERSINE.0, args::describe(args));
        return None;
    };
    Some(aerodist::central_angle(lat_a, lon_a, lat_b, lon_b))
}

/// `radToDist(REAL) -> REAL`, radians of arc to nautical miles.
pub fn rad_to_dist<A: Arguments + ?Sized>(args: &A) -> Option<f64> {
    unary(RAD_TO_DIST.0, args, aerodist::rad_to_dist)
}

/// `distToRad(REAL) -> REAL`, nautical miles to radians of arc.
pub fn dist_to_rad<A: Arguments + ?Sized>(args: &A) -> Option<f64> {
    unary(DIST_TO_RAD.0, args, aerodist::dist_to_rad)
}

/// Applies `f` to a single REAL argument.
fn unary<A: Arguments + ?Sized>(name: &str, args: &A, f: fn(f64) -> f64) -> Option<f64> {
    let Some([x]) = args::reals::<1, _>(args) else {
        ftlog::debug!("{name}: expected (Real), got ({})", args::describe(args));
        return None;
    };
    Some(f(x))
}
