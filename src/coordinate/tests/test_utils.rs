use crate::coordinate::GeoPoint;

/// Tolerance for values computed through radian round trips
pub const EPSILON: f64 = 1e-9;

/// Asserts that two floats are within `tolerance` of each other
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}", actual, tolerance, expected
    );
}

/// Asserts that two points are within `tolerance` degrees component-wise
pub fn assert_point_close(actual: &GeoPoint, expected: &GeoPoint, tolerance: f64) {
    assert_close(actual.lat, expected.lat, tolerance);
    assert_close(actual.lon, expected.lon, tolerance);
}
