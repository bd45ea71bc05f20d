//! Tests for the projection adapters and factory

extern crate std;

use crate::coordinate::{GeoPoint, ProjectedPoint};
use crate::projection::{AxisOrder, FnProjector, IdentityProjection, LayerPoint, LayerPointConverter,
                        LayerPointProjector, PointProjector, ProjectionFactory, ProjectionKind};

struct ScaledMap;

impl LayerPointConverter for ScaledMap {
    fn lat_lng_to_layer_point(&self, lat_lng: [f64; 2]) -> LayerPoint {
        LayerPoint::new(lat_lng[1] * 2.0, -lat_lng[0] * 2.0)
    }
}

#[test]
fn test_identity_keeps_lat_lon() {
    let projected = IdentityProjection.project(&GeoPoint::new(12.0, -34.0));
    std::assert_eq!(projected, ProjectedPoint::new(12.0, -34.0));
}

#[test]
fn test_fn_projector_axis_orders() {
    let swap = |p: [f64; 2]| [p[1], p[0]];
    let point = GeoPoint::new(1.0, 2.0);

    let lat_lon = FnProjector::new(swap);
    std::assert_eq!(lat_lon.order(), AxisOrder::LatLon);
    std::assert_eq!(lat_lon.project(&point).as_pair(), [2.0, 1.0]);

    let lon_lat = FnProjector::lon_lat(swap);
    std::assert_eq!(lon_lat.order(), AxisOrder::LonLat);
    std::assert_eq!(lon_lat.project(&point).as_pair(), [1.0, 2.0]);
}

#[test]
fn test_layer_point_projector_matches_converter() {
    let map = ScaledMap;
    let projector = LayerPointProjector::new(&map);

    let point = GeoPoint::new(10.0, 20.0);
    let expected = map.lat_lng_to_layer_point([10.0, 20.0]);
    std::assert_eq!(projector.project(&point), ProjectedPoint::new(expected.x, expected.y));
}

#[test]
fn test_boxed_and_borrowed_projectors() {
    let boxed: Box<dyn PointProjector> = Box::new(IdentityProjection);
    let borrowed = &IdentityProjection;
    let point = GeoPoint::new(3.0, 4.0);

    std::assert_eq!(boxed.project(&point), borrowed.project(&point));
}

#[test]
fn test_factory_names() {
    std::assert_eq!(ProjectionFactory::from_name("identity").unwrap(), ProjectionKind::Identity);
    std::assert_eq!(ProjectionFactory::from_name(" Mercator ").unwrap(), ProjectionKind::WebMercator);
    std::assert_eq!(ProjectionFactory::from_name("EPSG:3857").unwrap(), ProjectionKind::WebMercator);
    std::assert_eq!(ProjectionFactory::from_name("leaflet").unwrap(), ProjectionKind::Layer);
    std::assert_eq!(ProjectionFactory::from_name("none").unwrap(), ProjectionKind::None);
    std::assert!(ProjectionFactory::from_name("robinson").is_err());

    for name in ProjectionFactory::available_names() {
        std::assert!(ProjectionFactory::from_name(name).is_ok());
    }
}

#[test]
fn test_factory_creates_generic_projectors_only() {
    std::assert!(ProjectionFactory::create_projector(ProjectionKind::Identity).is_some());
    std::assert!(ProjectionFactory::create_projector(ProjectionKind::WebMercator).is_some());
    std::assert!(ProjectionFactory::create_projector(ProjectionKind::None).is_none());
    std::assert!(ProjectionFactory::create_projector(ProjectionKind::Layer).is_none());
}
