//! Destination points on a spherical Earth

use log::debug;

use super::point::GeoPoint;

/// Earth radius in kilometers used for destination points and distances
///
/// Differs from [`super::bbox::BBOX_EARTH_RADIUS_KM`]; both values are kept
/// so existing outputs stay stable.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Compute the point reached by travelling `distance` km from `center` along `bearing_deg`
///
/// The bearing is measured in degrees clockwise from north. The returned
/// longitude is not normalized and may fall outside [-180, 180] near the
/// antimeridian. Negative distances travel backwards along the bearing.
///
/// # Arguments
/// * `center` - Start point in degrees
/// * `bearing_deg` - Initial bearing in degrees
/// * `distance` - Distance in kilometers
pub fn compute_destination(center: GeoPoint, bearing_deg: f64, distance: f64) -> GeoPoint {
    let bearing = bearing_deg.to_radians();
    let lat = center.lat_rad();
    let lon = center.lon_rad();
    let angular = distance / EARTH_RADIUS_KM;

    let lat2 = (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon + f64::atan2(
        bearing.sin() * angular.sin() * lat.cos(),
        angular.cos() - lat.sin() * lat2.sin(),
    );

    let destination = GeoPoint::new(lat2.to_degrees(), lon2.to_degrees());
    debug!("Destination from ({}, {}) bearing {} at {} km: ({}, {})",
           center.lat, center.lon, bearing_deg, distance, destination.lat, destination.lon);

    destination
}

/// Great-circle distance in kilometers between two points (haversine formula)
pub fn great_circle_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
