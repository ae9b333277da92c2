//! Direct evaluation of the distance functions.

use aerodist::{units::great_circle_distance, Coordinate};

/// Levenshtein distance between the UTF-8 bytes of `a` and `b`.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> String {
    let distance: u64 = aerodist::strings::levenshtein_str(a, b);
    ftlog::debug!("levenshtein({a:?}, {b:?}) = {distance}");
    distance.to_string()
}

/// Central angle between `[lat_a, lon_a, lat_b, lon_b]`, optionally taking
/// degrees and reporting nautical miles.
#[must_use]
pub fn haversine(coordinates: [f64; 4], degrees: bool, nautical_miles: bool) -> String {
    let [lat_a, lon_a, lat_b, lon_b] = coordinates;
    let (a, b) = if degrees {
        (Coordinate::from_degrees(lat_a, lon_a), Coordinate::from_degrees(lat_b, lon_b))
    } else {
        (Coordinate::new(lat_a, lon_a), Coordinate::new(lat_b, lon_b))
    };
    ftlog::debug!("haversine({a:?}, {b:?})");

    let value = if nautical_miles {
        great_circle_distance(a.latitude, a.longitude, b.latitude, b.longitude)
    } else {
        a.angle_to(&b)
    };
    value.to_string()
}
