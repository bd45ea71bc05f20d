
use std::cell::RefCell;

use crate::coordinate::{GeoPoint, ProjectedPoint};
use crate::projection::{LayerPoint, LayerPointConverter, PointProjector};

/// Projector that records the points it was asked to project
#[derive(Default)]
pub(super) struct RecordingProjector {
    pub calls: RefCell<Vec<GeoPoint>>,
}

impl PointProjector for RecordingProjector {
    fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        self.calls.borrow_mut().push(*point);
        ProjectedPoint::new(point.lon * 10.0, point.lat * 10.0)
    }
}

/// Map stand-in whose layer points are offset degrees
pub(super) struct OffsetMap {
    pub dx: f64,
    pub dy: f64,
}

impl LayerPointConverter for OffsetMap {
    fn lat_lng_to_layer_point(&self, lat_lng: [f64; 2]) -> LayerPoint {
        LayerPoint::new(lat_lng[1] + self.dx, lat_lng[0] + self.dy)
    }
}
