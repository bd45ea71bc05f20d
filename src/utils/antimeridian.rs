//! Antimeridian handling for GeoJSON rings
//!
//! GeoJSON positions keep longitudes within [-180, 180], and a ring edge is
//! read as the short way between its ends. Rings crossing the antimeridian
//! are therefore cut at 180 degrees into one part per side.

use log::debug;

use crate::errors::{GeoBufferError, GeoResult};

const LON_EPSILON: f64 = 1e-9;

/// Split a closed `lon, lat` ring into closed parts within [-180, 180]
///
/// Longitudes are first unwrapped so consecutive positions never jump by
/// more than 180 degrees. Edges spanning exactly 360 degrees are kept as
/// they are: they are the sides of a box covering all longitudes.
///
/// # Returns
/// One ring when no cut is needed, two when the ring crosses the antimeridian
///
/// # Errors
/// `InvalidArgument` when the ring winds around a pole
pub fn split_at_antimeridian(ring: &[[f64; 2]]) -> GeoResult<Vec<Vec<[f64; 2]>>> {
    if ring.len() < 2 {
        return Ok(vec![ring.to_vec()]);
    }

    let unwrapped = unwrap_longitudes(ring);
    let first_lon = unwrapped[0][0];
    let last_lon = unwrapped[unwrapped.len() - 1][0];
    if (last_lon - first_lon).abs() > LON_EPSILON {
        return Err(GeoBufferError::InvalidArgument(
            "the outline encloses a pole and cannot be written as a GeoJSON polygon".to_string()));
    }

    let min_lon = unwrapped.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
    let turns = ((min_lon + 180.0 + LON_EPSILON) / 360.0).floor();
    let shifted: Vec<[f64; 2]> = unwrapped.iter().map(|p| [p[0] - 360.0 * turns, p[1]]).collect();
    let max_lon = shifted.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);

    if max_lon <= 180.0 + LON_EPSILON {
        return Ok(vec![clamp_longitudes(shifted)]);
    }

    debug!("Ring reaches longitude {}, splitting at the antimeridian", max_lon);

    let west = clip_at_antimeridian(&shifted, true);
    let east: Vec<[f64; 2]> = clip_at_antimeridian(&shifted, false)
        .into_iter()
        .map(|p| [p[0] - 360.0, p[1]])
        .collect();

    Ok([west, east]
        .into_iter()
        .filter(|part| part.len() >= 4)
        .map(clamp_longitudes)
        .collect())
}

fn unwrap_longitudes(ring: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut result = Vec::with_capacity(ring.len());
    let mut offset = 0.0;
    let mut previous_lon = ring[0][0];

    for point in ring {
        let delta = point[0] - previous_lon;
        if delta.abs() > 180.0 && (delta.abs() - 360.0).abs() > LON_EPSILON {
            offset -= 360.0 * (delta / 360.0).round();
        }
        result.push([point[0] + offset, point[1]]);
        previous_lon = point[0];
    }

    result
}

// Sutherland-Hodgman against the half plane on one side of longitude 180
fn clip_at_antimeridian(ring: &[[f64; 2]], keep_west: bool) -> Vec<[f64; 2]> {
    let inside = |p: &[f64; 2]| if keep_west { p[0] <= 180.0 } else { p[0] >= 180.0 };
    let mut result = Vec::with_capacity(ring.len() + 2);

    for edge in ring.windows(2) {
        let (from, to) = (edge[0], edge[1]);
        match (inside(&from), inside(&to)) {
            (true, true) => result.push(to),
            (false, true) => {
                result.push(crossing(from, to));
                result.push(to);
            },
            (true, false) => result.push(crossing(from, to)),
            (false, false) => {},
        }
    }

    if let Some(first) = result.first().copied() {
        if result.last() != Some(&first) {
            result.push(first);
        }
    }

    result
}

fn crossing(from: [f64; 2], to: [f64; 2]) -> [f64; 2] {
    let t = (180.0 - from[0]) / (to[0] - from[0]);
    [180.0, from[1] + t * (to[1] - from[1])]
}

fn clamp_longitudes(ring: Vec<[f64; 2]>) -> Vec<[f64; 2]> {
    ring.into_iter().map(|p| [p[0].clamp(-180.0, 180.0), p[1]]).collect()
}
