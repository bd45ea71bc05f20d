//! Spherical Web Mercator (EPSG:3857) projections

use std::f64::consts::PI;
use log::debug;

use crate::coordinate::{GeoPoint, ProjectedPoint};
use super::layer_point::{LayerPoint, LayerPointConverter};
use super::projector::PointProjector;

/// Earth radius in meters used by Web Mercator
pub const MERCATOR_EARTH_RADIUS: f64 = 6378137.0;

/// Maximum latitude representable in Web Mercator
pub const MAX_MERCATOR_LATITUDE: f64 = 85.0511287798;

/// Size in pixels of a tile at zoom level 0
const TILE_SIZE: f64 = 256.0;

/// Project a point to Web Mercator meters, clamping the latitude
fn to_mercator_meters(lat: f64, lon: f64) -> (f64, f64) {
    let lat = lat.max(-MAX_MERCATOR_LATITUDE).min(MAX_MERCATOR_LATITUDE);

    let x = lon * MERCATOR_EARTH_RADIUS * PI / 180.0;
    let sin = lat.to_radians().sin();
    let y = MERCATOR_EARTH_RADIUS * ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;

    (x, y)
}

/// Projects geographic points to Web Mercator meters
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercatorProjection;

impl WebMercatorProjection {
    /// Convert Web Mercator meters back to a geographic point
    pub fn unproject(&self, point: &ProjectedPoint) -> GeoPoint {
        let lon = point.x * 180.0 / (MERCATOR_EARTH_RADIUS * PI);
        let lat = (2.0 * f64::atan(f64::exp(point.y / MERCATOR_EARTH_RADIUS)) - PI / 2.0) * 180.0 / PI;

        GeoPoint::new(lat, lon)
    }
}

impl PointProjector for WebMercatorProjection {
    fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        let (x, y) = to_mercator_meters(point.lat, point.lon);
        debug!("Projected ({}, {}) to Web Mercator ({}, {})", point.lat, point.lon, x, y);
        ProjectedPoint::new(x, y)
    }
}

/// Layer point conversion for a Web Mercator slippy map
///
/// Reproduces the EPSG:3857 CRS of common web map widgets: meters are scaled
/// to `256 * 2^zoom` pixels across the world, rounded to whole pixels and
/// offset by the map's pixel origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercatorLayer {
    zoom: f64,
    pixel_origin: ProjectedPoint,
}

impl WebMercatorLayer {
    /// Create a layer at `zoom` whose top-left pixel is `pixel_origin`
    pub fn new(zoom: f64, pixel_origin: ProjectedPoint) -> Self {
        WebMercatorLayer { zoom, pixel_origin }
    }

    /// Zoom level of this layer
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Pixel origin of this layer
    pub fn pixel_origin(&self) -> ProjectedPoint {
        self.pixel_origin
    }

    /// Pixel scale of the whole world at this zoom
    pub fn scale(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Absolute (unrounded) pixel position of a point at this zoom
    pub fn lat_lng_to_pixel(&self, lat: f64, lon: f64) -> ProjectedPoint {
        let (x, y) = to_mercator_meters(lat, lon);
        let factor = 0.5 / (PI * MERCATOR_EARTH_RADIUS);
        let scale = self.scale();

        ProjectedPoint::new(
            scale * (factor * x + 0.5),
            scale * (-factor * y + 0.5),
        )
    }
}

impl Default for WebMercatorLayer {
    fn default() -> Self {
        WebMercatorLayer::new(0.0, ProjectedPoint::new(0.0, 0.0))
    }
}

impl LayerPointConverter for WebMercatorLayer {
    fn lat_lng_to_layer_point(&self, lat_lng: [f64; 2]) -> LayerPoint {
        let pixel = self.lat_lng_to_pixel(lat_lng[0], lat_lng[1]);
        LayerPoint::new(
            pixel.x.round() - self.pixel_origin.x,
            pixel.y.round() - self.pixel_origin.y,
        )
    }
}
