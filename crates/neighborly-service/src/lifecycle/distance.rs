//! Great-circle distance for completion verification.

use neighborly_entity::request::GeoPoint;

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points, via the haversine
/// formula.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Distance between the request location and the reported position, and
/// whether it is within the verification radius.
pub fn verify_proximity(target: GeoPoint, reported: GeoPoint, radius_meters: f64) -> (f64, bool) {
    let distance = haversine_distance(target, reported);
    (distance, distance <= radius_meters)
}
