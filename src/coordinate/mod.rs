//! Coordinate handling on a spherical Earth
//!
//! This module provides the geographic and projected point types, the
//! geodesic bounding box and destination point computations, and the polygon
//! container returned by the shape builders.

mod bbox;
mod destination;
mod point;
mod polygon;
#[cfg(test)]
pub(crate) mod tests;

// Re-export key types
pub use self::bbox::{compute_bounding_box, BoundingBox, BBOX_EARTH_RADIUS_KM};
pub use self::destination::{compute_destination, great_circle_distance, EARTH_RADIUS_KM};
pub use self::point::{GeoPoint, ProjectedPoint};
pub use self::polygon::{Outline, Polygon};
