pub mod errors;
pub mod coordinate;
pub mod projection;
pub mod shapes;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoBuffer;

pub use errors::{GeoBufferError, GeoResult};
pub use coordinate::{compute_bounding_box, compute_destination, BoundingBox, GeoPoint, Outline, Polygon, ProjectedPoint};
pub use projection::{FnProjector, LayerPointConverter, LayerPointProjector, PointProjector};
pub use shapes::{project_bounding_square, project_circle, project_circle_layer};
