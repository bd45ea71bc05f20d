//! Projections from geographic coordinates to drawing coordinates
//!
//! The shape builders depend only on [`PointProjector`]. Mapping libraries
//! expose one of two calling conventions, a plain pair-to-pair function or a
//! map object with a layer-point conversion method; each gets an adapter.

mod factory;
mod generic;
mod layer_point;
mod projector;
mod web_mercator;
#[cfg(test)]
mod tests;

pub use self::factory::{ProjectionFactory, ProjectionKind};
pub use self::generic::{AxisOrder, FnProjector};
pub use self::layer_point::{LayerPoint, LayerPointConverter, LayerPointProjector};
pub use self::projector::{IdentityProjection, PointProjector};
pub use self::web_mercator::{WebMercatorLayer, WebMercatorProjection, MAX_MERCATOR_LATITUDE, MERCATOR_EARTH_RADIUS};
