use geo::Point;

/// Mean Earth radius used by the haversine formula, in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points given in decimal degrees,
/// rounded to the nearest metre (haversine formula).
///
/// Symmetric in its two points and zero for identical points. Inputs are
/// expected to be bounded the way `Coordinate` bounds them; differences of
/// near-`f64::MAX` values overflow and trip a debug assertion.
pub fn distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> u64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lng2 - lng1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    debug_assert!(c.is_finite(), "non-finite central angle for ({lat1}, {lng1}) -> ({lat2}, {lng2})");

    (EARTH_RADIUS_M * c).round() as u64
}

/// [`distance_meters`] between two `geo` points (`x` = longitude, `y` = latitude).
#[inline]
pub fn point_distance(a: Point<f64>, b: Point<f64>) -> u64 {
    distance_meters(a.y(), a.x(), b.y(), b.x())
}
