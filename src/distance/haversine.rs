//! Great-circle distance.

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two lat/lon positions, by the
/// haversine formula.
///
/// Degrees in, meters out. Accurate to well under snapping tolerance at
/// road-network scales.
///
/// # Examples
///
/// ```
/// use roadcover::distance::haversine;
///
/// // One degree of latitude is roughly 111 km.
/// let d = haversine(52.0, 13.0, 53.0, 13.0);
/// assert!((d - 111_195.0).abs() < 100.0);
/// ```
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
