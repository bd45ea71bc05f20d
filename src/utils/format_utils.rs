//! Output formatting utilities
//!
//! Renders point sequences and bounding boxes as CSV, JSON or GeoJSON text.

use crate::coordinate::{BoundingBox, GeoPoint, Polygon, ProjectedPoint};
use crate::errors::{GeoBufferError, GeoResult};
use crate::utils::antimeridian::split_at_antimeridian;

/// Text format for command output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Header row followed by one row per point
    Csv,
    /// Array of two-element arrays
    Json,
    /// GeoJSON Feature (geographic output only)
    GeoJson,
}

impl OutputFormat {
    /// Look up a format by name
    pub fn from_name(name: &str) -> GeoResult<OutputFormat> {
        match name.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "geojson" => Ok(OutputFormat::GeoJson),
            _ => Err(GeoBufferError::ParseError(format!("Unknown output format: {}", name))),
        }
    }

    /// Name of the format
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::GeoJson => "geojson",
        }
    }
}

fn fmt_num(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    // values that round to zero print without a sign
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => unsigned.to_string(),
        _ => text,
    }
}

fn pairs_to_csv(header: &str, pairs: &[[f64; 2]], precision: usize) -> String {
    let mut result = String::with_capacity(16 + pairs.len() * 24);
    result.push_str(header);
    result.push('\n');
    for pair in pairs {
        result.push_str(&fmt_num(pair[0], precision));
        result.push(',');
        result.push_str(&fmt_num(pair[1], precision));
        result.push('\n');
    }
    result
}

fn pairs_to_json(pairs: &[[f64; 2]], precision: usize) -> String {
    let items: Vec<String> = pairs
        .iter()
        .map(|pair| format!("[{},{}]", fmt_num(pair[0], precision), fmt_num(pair[1], precision)))
        .collect();
    format!("[{}]\n", items.join(","))
}

/// Format geographic points
///
/// CSV and JSON keep the `lat, lon` order and the points exactly as given.
/// GeoJSON uses `lon, lat` order, closes the ring if it is open and keeps
/// longitudes within [-180, 180]. A ring crossing the antimeridian becomes a
/// `MultiPolygon` with one part on each side.
///
/// # Errors
/// `InvalidArgument` for GeoJSON output of a ring that encloses a pole
pub fn format_geo_points(polygon: &Polygon<GeoPoint>, format: OutputFormat, precision: usize) -> GeoResult<String> {
    match format {
        OutputFormat::Csv => {
            let pairs: Vec<[f64; 2]> = polygon.iter().map(|p| p.as_lat_lon()).collect();
            Ok(pairs_to_csv("lat,lon", &pairs, precision))
        },
        OutputFormat::Json => {
            let pairs: Vec<[f64; 2]> = polygon.iter().map(|p| p.as_lat_lon()).collect();
            Ok(pairs_to_json(&pairs, precision))
        },
        OutputFormat::GeoJson => {
            let ring: Vec<[f64; 2]> = polygon.closed().iter().map(|p| p.as_lon_lat()).collect();
            let parts = split_at_antimeridian(&ring)?;

            let geometry = if parts.len() == 1 {
                format!("{{\"type\":\"Polygon\",\"coordinates\":[{}]}}",
                        pairs_to_json(&parts[0], precision).trim_end())
            } else {
                let polygons: Vec<String> = parts
                    .iter()
                    .map(|part| format!("[{}]", pairs_to_json(part, precision).trim_end()))
                    .collect();
                format!("{{\"type\":\"MultiPolygon\",\"coordinates\":[{}]}}", polygons.join(","))
            };

            Ok(format!("{{\"type\":\"Feature\",\"properties\":{{}},\"geometry\":{}}}\n", geometry))
        },
    }
}

/// Format projected points
///
/// # Errors
/// `InvalidArgument` for GeoJSON, which only holds geographic coordinates
pub fn format_projected_points(polygon: &Polygon<ProjectedPoint>, format: OutputFormat, precision: usize) -> GeoResult<String> {
    let pairs: Vec<[f64; 2]> = polygon.iter().map(|p| p.as_pair()).collect();
    match format {
        OutputFormat::Csv => Ok(pairs_to_csv("x,y", &pairs, precision)),
        OutputFormat::Json => Ok(pairs_to_json(&pairs, precision)),
        OutputFormat::GeoJson => Err(GeoBufferError::InvalidArgument(
            "GeoJSON output requires geographic points, use --projection none or another format".to_string())),
    }
}

/// Format a bounding box as `min_lon, min_lat, max_lon, max_lat`
pub fn format_bounding_box(bbox: &BoundingBox, format: OutputFormat, precision: usize) -> String {
    let (min_lon, min_lat, max_lon, max_lat) = bbox.as_tuple();
    let values = [min_lon, min_lat, max_lon, max_lat]
        .iter()
        .map(|v| fmt_num(*v, precision))
        .collect::<Vec<String>>()
        .join(",");

    match format {
        OutputFormat::Csv => format!("min_lon,min_lat,max_lon,max_lat\n{}\n", values),
        OutputFormat::Json => format!("[{}]\n", values),
        OutputFormat::GeoJson => format!(
            "{{\"type\":\"Feature\",\"bbox\":[{}],\"properties\":{{}},\"geometry\":null}}\n",
            values
        ),
    }
}
