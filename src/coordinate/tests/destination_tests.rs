//! Tests for destination points and great-circle distances

extern crate std;

use crate::coordinate::{compute_destination, great_circle_distance, GeoPoint, EARTH_RADIUS_KM};
use super::test_utils::{assert_close, assert_point_close, EPSILON};

#[test]
fn test_zero_distance_returns_center_for_any_bearing() {
    let center = GeoPoint::new(48.8566, 2.3522);
    for bearing in [0.0, 45.0, 90.0, 137.5, 180.0, 270.0, 359.0, -90.0, 720.0] {
        let destination = compute_destination(center, bearing, 0.0);
        assert_point_close(&destination, &center, EPSILON);
    }
}

#[test]
fn test_due_north_moves_latitude_only() {
    let center = GeoPoint::new(10.0, 20.0);
    let destination = compute_destination(center, 0.0, 111.0);

    assert_close(destination.lat, 10.0 + (111.0 / EARTH_RADIUS_KM).to_degrees(), 1e-9);
    assert_close(destination.lon, 20.0, 1e-12);
}

#[test]
fn test_due_east_on_equator_moves_longitude_only() {
    let destination = compute_destination(GeoPoint::new(0.0, 0.0), 90.0, 500.0);

    assert_close(destination.lat, 0.0, 1e-9);
    assert_close(destination.lon, (500.0 / EARTH_RADIUS_KM).to_degrees(), 1e-9);
}

#[test]
fn test_destination_lies_at_requested_distance() {
    let center = GeoPoint::new(-33.8688, 151.2093);
    for bearing in [0.0, 30.0, 120.0, 210.0, 300.0] {
        let destination = compute_destination(center, bearing, 250.0);
        assert_close(great_circle_distance(center, destination), 250.0, 1e-6);
    }
}

#[test]
fn test_negative_distance_travels_backwards() {
    let center = GeoPoint::new(20.0, 30.0);
    let backwards = compute_destination(center, 0.0, -100.0);
    let south = compute_destination(center, 180.0, 100.0);

    assert_point_close(&backwards, &south, 1e-9);
}

#[test]
fn test_longitude_is_not_normalized_near_antimeridian() {
    let destination = compute_destination(GeoPoint::new(0.0, 179.9), 90.0, 100.0);

    std::assert!(destination.lon > 180.0);
}

#[test]
fn test_great_circle_distance_of_same_point_is_zero() {
    let point = GeoPoint::new(12.5, -45.25);
    assert_close(great_circle_distance(point, point), 0.0, EPSILON);
}
