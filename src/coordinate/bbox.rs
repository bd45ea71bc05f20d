//! Geodesic bounding box around a center point
//!
//! Computes the bounding coordinates of all points on the surface of a sphere
//! whose great-circle distance to a center point is less than or equal to a
//! given distance, following Jan Matuschek's method
//! (<http://JanMatuschek.de/LatitudeLongitudeBoundingCoordinates>).

use std::f64::consts::PI;
use log::debug;

use super::point::GeoPoint;
use crate::errors::{GeoBufferError, GeoResult};

/// Earth radius in kilometers used for bounding boxes
pub const BBOX_EARTH_RADIUS_KM: f64 = 6378.1;

// Radian/degree round trips of the global limits are not exact
const LIMIT_EPSILON: f64 = 1e-9;

/// A bounding box in geographic degrees
///
/// When the region straddles the antimeridian, `min_lon` is greater than
/// `max_lon`. When it contains a pole, the box spans all longitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum (western) longitude
    pub min_lon: f64,
    /// Minimum (southern) latitude
    pub min_lat: f64,
    /// Maximum (eastern) longitude
    pub max_lon: f64,
    /// Maximum (northern) latitude
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from its bounds
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        BoundingBox {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// The box as `(min_lon, min_lat, max_lon, max_lat)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_lon, self.min_lat, self.max_lon, self.max_lat)
    }

    /// Southwest corner
    pub fn south_west(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lon)
    }

    /// Northwest corner
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.min_lon)
    }

    /// Northeast corner
    pub fn north_east(&self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lon)
    }

    /// Southeast corner
    pub fn south_east(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.max_lon)
    }

    /// The four corners in the order SW, NW, NE, SE
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            self.south_west(),
            self.north_west(),
            self.north_east(),
            self.south_east(),
        ]
    }

    /// Whether the longitude range wraps across the antimeridian
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_lon > self.max_lon
    }

    /// Whether the box degenerated into a full longitude band (a pole is inside)
    pub fn spans_all_longitudes(&self) -> bool {
        self.min_lon <= -180.0 + LIMIT_EPSILON && self.max_lon >= 180.0 - LIMIT_EPSILON
    }
}

/// Compute the bounding box of all points within `distance` km of `center`
///
/// # Arguments
/// * `center` - Center point in degrees
/// * `distance` - Great-circle distance in kilometers, must not be negative
///
/// # Returns
/// The bounding box in degrees, or `InvalidArgument` for a negative distance
pub fn compute_bounding_box(center: GeoPoint, distance: f64) -> GeoResult<BoundingBox> {
    if distance < 0.0 {
        return Err(GeoBufferError::InvalidArgument(format!(
            "distance must not be negative, got {}",
            distance
        )));
    }

    let min_lat_limit = (-90.0f64).to_radians();
    let max_lat_limit = 90.0f64.to_radians();
    let min_lon_limit = (-180.0f64).to_radians();
    let max_lon_limit = 180.0f64.to_radians();

    // angular distance on a great circle
    let rad_dist = distance / BBOX_EARTH_RADIUS_KM;

    let rad_lat = center.lat_rad();
    let rad_lon = center.lon_rad();

    let mut min_lat = rad_lat - rad_dist;
    let mut max_lat = rad_lat + rad_dist;
    let mut min_lon;
    let mut max_lon;

    debug!("Bounding box for ({}, {}) at {} km: angular distance {} rad",
           center.lat, center.lon, distance, rad_dist);

    if min_lat > min_lat_limit && max_lat < max_lat_limit {
        // |lat| + rad_dist < PI/2 here, so the asin argument stays within [-1, 1]
        let delta_lon = (rad_dist.sin() / rad_lat.cos()).asin();
        min_lon = rad_lon - delta_lon;
        max_lon = rad_lon + delta_lon;

        if min_lon < min_lon_limit {
            min_lon += 2.0 * PI;
            debug!("Western bound wrapped across the antimeridian");
        }
        if max_lon > max_lon_limit {
            max_lon -= 2.0 * PI;
            debug!("Eastern bound wrapped across the antimeridian");
        }
    } else {
        debug!("A pole lies within {} km, using full longitude band", distance);
        min_lat = min_lat.max(min_lat_limit);
        max_lat = max_lat.min(max_lat_limit);
        min_lon = min_lon_limit;
        max_lon = max_lon_limit;
    }

    Ok(BoundingBox::new(
        rad_to_deg(min_lon),
        rad_to_deg(min_lat),
        rad_to_deg(max_lon),
        rad_to_deg(max_lat),
    ))
}

// (180 * rad) / PI rather than f64::to_degrees; outputs must not change in the last bit
fn rad_to_deg(rad: f64) -> f64 {
    (180.0 * rad) / PI
}
