//! Tests for the Web Mercator projections

extern crate std;

use crate::coordinate::tests::test_utils::{assert_close, assert_point_close};
use crate::coordinate::{GeoPoint, ProjectedPoint};
use crate::projection::{LayerPointConverter, PointProjector, WebMercatorLayer, WebMercatorProjection,
                        MERCATOR_EARTH_RADIUS};

#[test]
fn test_origin_projects_to_zero() {
    let projected = WebMercatorProjection.project(&GeoPoint::new(0.0, 0.0));
    assert_close(projected.x, 0.0, 1e-9);
    assert_close(projected.y, 0.0, 1e-9);
}

#[test]
fn test_antimeridian_x_is_half_circumference() {
    let projected = WebMercatorProjection.project(&GeoPoint::new(0.0, 180.0));
    assert_close(projected.x, std::f64::consts::PI * MERCATOR_EARTH_RADIUS, 1e-6);
}

#[test]
fn test_unproject_inverts_project() {
    let point = GeoPoint::new(40.7128, -74.006);
    let projected = WebMercatorProjection.project(&point);
    let back = WebMercatorProjection.unproject(&projected);

    assert_point_close(&back, &point, 1e-9);
}

#[test]
fn test_latitude_is_clamped() {
    let pole = WebMercatorProjection.project(&GeoPoint::new(90.0, 0.0));
    let limit = WebMercatorProjection.project(&GeoPoint::new(85.0511287798, 0.0));

    std::assert!(pole.y.is_finite());
    assert_close(pole.y, limit.y, 1e-6);
}

#[test]
fn test_layer_zoom_zero_world_is_256_pixels() {
    let layer = WebMercatorLayer::default();

    let center = layer.lat_lng_to_pixel(0.0, 0.0);
    assert_close(center.x, 128.0, 1e-9);
    assert_close(center.y, 128.0, 1e-9);

    let east = layer.lat_lng_to_pixel(0.0, 180.0);
    assert_close(east.x, 256.0, 1e-9);
}

#[test]
fn test_layer_points_are_rounded_and_offset() {
    let layer = WebMercatorLayer::new(2.0, ProjectedPoint::new(100.0, 200.0));
    std::assert_eq!(layer.scale(), 1024.0);

    let point = layer.lat_lng_to_layer_point([0.0, 0.0]);
    std::assert_eq!(point.x, 512.0 - 100.0);
    std::assert_eq!(point.y, 512.0 - 200.0);

    let pixel = layer.lat_lng_to_pixel(10.3, 20.7);
    let rounded = layer.lat_lng_to_layer_point([10.3, 20.7]);
    std::assert_eq!(rounded.x, pixel.x.round() - 100.0);
    std::assert_eq!(rounded.y, pixel.y.round() - 200.0);
}

#[test]
fn test_layer_north_is_up() {
    let layer = WebMercatorLayer::new(4.0, ProjectedPoint::new(0.0, 0.0));
    let north = layer.lat_lng_to_layer_point([45.0, 0.0]);
    let south = layer.lat_lng_to_layer_point([-45.0, 0.0]);

    std::assert!(north.y < south.y);
}
