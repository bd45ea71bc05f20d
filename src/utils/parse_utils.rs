//! Parsing of command line values
//!
//! Coordinates are accepted as two numbers separated by a comma, a semicolon
//! or whitespace, e.g. `40.7,-74.0`, `40.7; -74.0` or `40.7 -74.0`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::coordinate::{GeoPoint, ProjectedPoint};
use crate::errors::{GeoBufferError, GeoResult};

lazy_static! {
    static ref PAIR_PATTERN: Regex = Regex::new(
        r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*(?:[,;]\s*|\s+)([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*$"
    ).expect("pair pattern is valid");
}

/// Parse two numbers from a pair string
pub fn parse_pair(value: &str) -> GeoResult<(f64, f64)> {
    let captures = PAIR_PATTERN.captures(value)
        .ok_or_else(|| GeoBufferError::ParseError(format!(
            "Expected two numbers like '40.7,-74.0', got '{}'", value)))?;

    let first = parse_number(&captures[1], "first value")?;
    let second = parse_number(&captures[2], "second value")?;

    Ok((first, second))
}

/// Parse a `lat,lon` center point, rejecting out of range degrees
pub fn parse_center(value: &str) -> GeoResult<GeoPoint> {
    let (lat, lon) = parse_pair(value)?;
    let center = GeoPoint::new(lat, lon);

    if !center.is_in_range() {
        return Err(GeoBufferError::ParseError(format!(
            "Center must have latitude in [-90, 90] and longitude in [-180, 180], got {},{}",
            lat, lon)));
    }

    Ok(center)
}

/// Parse an `x,y` pixel origin
pub fn parse_origin(value: &str) -> GeoResult<ProjectedPoint> {
    let (x, y) = parse_pair(value)?;
    Ok(ProjectedPoint::new(x, y))
}

/// Parse a finite floating point value
pub fn parse_number(value: &str, what: &str) -> GeoResult<f64> {
    let number = value.trim().parse::<f64>()
        .map_err(|_| GeoBufferError::ParseError(format!("Invalid {}: '{}'", what, value)))?;

    if !number.is_finite() {
        return Err(GeoBufferError::ParseError(format!("{} must be finite, got '{}'", what, value)));
    }

    Ok(number)
}

/// Parse a positive count
pub fn parse_count(value: &str, what: &str) -> GeoResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(GeoBufferError::InvalidArgument(format!("{} must be at least 1", what))),
        Ok(count) => Ok(count),
        Err(_) => Err(GeoBufferError::ParseError(format!("Invalid {}: '{}'", what, value))),
    }
}
