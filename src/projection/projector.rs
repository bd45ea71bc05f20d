//! The uniform projection capability used by the shape builders

use crate::coordinate::{GeoPoint, ProjectedPoint};

/// Maps a geographic point to screen, layer or map coordinates
///
/// The shape builders call only this trait. Each mapping-library calling
/// convention gets an adapter implementing it (see [`super::FnProjector`]
/// and [`super::LayerPointProjector`]). Implementations may be stateful; the
/// builders call `project` exactly once per output point, in drawing order.
pub trait PointProjector {
    /// Project a single point
    fn project(&self, point: &GeoPoint) -> ProjectedPoint;
}

impl<P: PointProjector + ?Sized> PointProjector for &P {
    fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        (**self).project(point)
    }
}

impl<P: PointProjector + ?Sized> PointProjector for Box<P> {
    fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        (**self).project(point)
    }
}

/// Passes coordinates through unchanged: `x = lat`, `y = lon`
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjection;

impl PointProjector for IdentityProjection {
    fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        ProjectedPoint::new(point.lat, point.lon)
    }
}
