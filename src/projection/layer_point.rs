//! Adapter for map objects exposing a lat/lng to layer point conversion

use crate::coordinate::{GeoPoint, ProjectedPoint};
use super::projector::PointProjector;

/// A pixel position relative to a map layer's origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPoint {
    pub x: f64,
    pub y: f64,
}

impl LayerPoint {
    pub fn new(x: f64, y: f64) -> Self {
        LayerPoint { x, y }
    }
}

/// Point conversion capability of a slippy-map widget
///
/// Mirrors Leaflet's `map.latLngToLayerPoint([lat, lng])`.
pub trait LayerPointConverter {
    /// Convert a `[lat, lng]` pair to layer pixel coordinates
    fn lat_lng_to_layer_point(&self, lat_lng: [f64; 2]) -> LayerPoint;
}

impl<C: LayerPointConverter + ?Sized> LayerPointConverter for &C {
    fn lat_lng_to_layer_point(&self, lat_lng: [f64; 2]) -> LayerPoint {
        (**self).lat_lng_to_layer_point(lat_lng)
    }
}

/// Exposes a [`LayerPointConverter`] as a [`PointProjector`]
pub struct LayerPointProjector<'a, C: ?Sized> {
    converter: &'a C,
}

impl<'a, C: LayerPointConverter + ?Sized> LayerPointProjector<'a, C> {
    /// Borrow a converter for the duration of a projection
    pub fn new(converter: &'a C) -> Self {
        LayerPointProjector { converter }
    }
}

impl<'a, C: LayerPointConverter + ?Sized> PointProjector for LayerPointProjector<'a, C> {
    fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        let layer_point = self.converter.lat_lng_to_layer_point(point.as_lat_lon());
        ProjectedPoint::new(layer_point.x, layer_point.y)
    }
}
