//! Integration tests for the geobuffer facade

extern crate std;

use std::fs;

use geobuffer::coordinate::{great_circle_distance, GeoPoint, Outline};
use geobuffer::projection::ProjectionKind;
use geobuffer::utils::config::Settings;
use geobuffer::utils::format_utils::OutputFormat;
use geobuffer::utils::logger::Logger;
use geobuffer::GeoBuffer;

#[test]
fn test_complete_square_workflow() {
    let geobuffer = GeoBuffer::default();
    let center = GeoPoint::new(40.0, -74.0);

    let bbox = geobuffer.bounding_box(center, 10.0).unwrap();
    let outline = geobuffer.square(center, 10.0, ProjectionKind::Identity).unwrap();

    let pairs = outline.as_pairs();
    std::assert_eq!(pairs.len(), 5);
    std::assert_eq!(pairs[0], pairs[4]);
    std::assert_eq!(pairs[0], [bbox.min_lat, bbox.min_lon]);
    std::assert_eq!(pairs[2], [bbox.max_lat, bbox.max_lon]);

    let csv = geobuffer.render_outline(&outline, OutputFormat::Csv).unwrap();
    std::assert!(csv.starts_with("x,y\n"));
    std::assert_eq!(csv.lines().count(), 6);
}

#[test]
fn test_geographic_square_renders_geojson() {
    let geobuffer = GeoBuffer::default();
    let outline = geobuffer.square(GeoPoint::new(10.0, 10.0), 50.0, ProjectionKind::None).unwrap();

    std::assert!(outline.is_geographic());
    let geojson = geobuffer.render_outline(&outline, OutputFormat::GeoJson).unwrap();
    std::assert!(geojson.contains("\"type\":\"Polygon\""));
}

#[test]
fn test_circle_uses_configured_intervals() {
    let settings = Settings::defaults().overlay_str("[circle]\nintervals = 10\n").unwrap();
    let geobuffer = GeoBuffer::new(settings);
    let center = GeoPoint::new(0.0, 0.0);

    let outline = geobuffer.circle(center, 100.0, ProjectionKind::None, None).unwrap();
    std::assert_eq!(outline.len(), 10);

    match outline {
        Outline::Geographic(polygon) => {
            std::assert!(!polygon.is_closed());
            for point in polygon.iter() {
                std::assert!((great_circle_distance(center, *point) - 100.0).abs() < 1e-6);
            }
        },
        Outline::Projected(_) => panic!("expected geographic circle"),
    }

    let explicit = geobuffer.circle(center, 100.0, ProjectionKind::None, Some(4)).unwrap();
    std::assert_eq!(explicit.len(), 4);
}

#[test]
fn test_layer_and_mercator_circles() {
    let settings = Settings::defaults()
        .overlay_str("[projection]\nzoom = 10\norigin_x = 130000\norigin_y = 98000\n")
        .unwrap();
    let geobuffer = GeoBuffer::new(settings);
    let center = GeoPoint::new(51.5, -0.12);

    let layer = geobuffer.circle(center, 2.0, ProjectionKind::Layer, Some(8)).unwrap();
    std::assert!(!layer.is_geographic());
    for pair in layer.as_pairs() {
        std::assert_eq!(pair[0], pair[0].round());
        std::assert_eq!(pair[1], pair[1].round());
    }

    let mercator = geobuffer.circle(center, 2.0, ProjectionKind::WebMercator, Some(8)).unwrap();
    std::assert_eq!(mercator.len(), 8);
    std::assert!(geobuffer.render_outline(&mercator, OutputFormat::GeoJson).is_err());
}

#[test]
fn test_errors_surface_through_facade() {
    let geobuffer = GeoBuffer::default();
    let center = GeoPoint::new(0.0, 0.0);

    std::assert!(geobuffer.bounding_box(center, -1.0).unwrap_err().is_invalid_argument());
    std::assert!(geobuffer.square(center, -1.0, ProjectionKind::Layer).unwrap_err().is_invalid_argument());
    std::assert!(geobuffer.circle(center, 1.0, ProjectionKind::Identity, Some(0)).unwrap_err().is_invalid_argument());
}

#[test]
fn test_settings_file_and_logger() {
    let dir = std::env::temp_dir();
    let config_path = dir.join("geobuffer_integration_settings.toml");
    fs::write(&config_path, "[output]\nprecision = 2\n").unwrap();

    let settings = Settings::load(config_path.to_str()).unwrap();
    std::assert_eq!(settings.precision, 2);

    let geobuffer = GeoBuffer::new(settings);
    let bbox = geobuffer.bounding_box(GeoPoint::new(0.0, 0.0), 0.0).unwrap();
    std::assert_eq!(geobuffer.render_bounding_box(&bbox, OutputFormat::Json), "[0.00,0.00,0.00,0.00]\n");

    let log_path = dir.join("geobuffer_integration.log");
    let logger = Logger::new(log_path.to_str().unwrap()).unwrap();
    logger.write_line("bounding box rendered").unwrap();
    std::assert!(fs::read_to_string(&log_path).unwrap().contains("bounding box rendered"));

    let _ = fs::remove_file(config_path);
    let _ = fs::remove_file(log_path);
}

#[test]
fn test_geojson_across_antimeridian() {
    let geobuffer = GeoBuffer::default();
    let center = GeoPoint::new(0.0, 179.9);

    let square = geobuffer.square(center, 100.0, ProjectionKind::None).unwrap();
    let square_geojson = geobuffer.render_outline(&square, OutputFormat::GeoJson).unwrap();
    std::assert!(square_geojson.contains("\"type\":\"MultiPolygon\""));
    std::assert!(!square_geojson.contains("-0.000000"));

    let circle = geobuffer.circle(center, 100.0, ProjectionKind::None, Some(16)).unwrap();
    let circle_geojson = geobuffer.render_outline(&circle, OutputFormat::GeoJson).unwrap();
    std::assert!(circle_geojson.contains("\"type\":\"MultiPolygon\""));
    std::assert!(!circle_geojson.contains("180.7"));
}
