//! Bounding squares around a center point

use log::debug;

use crate::coordinate::{compute_bounding_box, GeoPoint, Polygon, ProjectedPoint};
use crate::errors::GeoResult;
use crate::projection::{LayerPointConverter, LayerPointProjector, PointProjector};

/// Build the closed geographic ring of the bounding square
///
/// The ring is SW, NW, NE, SE, SW: five points with the first repeated last.
/// `side_length` is passed unchanged as the bounding-box distance, so the
/// square extends `side_length` km from the center in each direction.
///
/// # Errors
/// `InvalidArgument` when `side_length` is negative
pub fn bounding_square(center: GeoPoint, side_length: f64) -> GeoResult<Polygon<GeoPoint>> {
    let bbox = compute_bounding_box(center, side_length)?;
    let [sw, nw, ne, se] = bbox.corners();

    if bbox.crosses_antimeridian() {
        debug!("Bounding square around ({}, {}) crosses the antimeridian", center.lat, center.lon);
    }

    Ok(Polygon::new(vec![sw, nw, ne, se, sw]))
}

/// Build the bounding square and map each ring point through `projector`
///
/// # Arguments
/// * `center` - Center point in degrees
/// * `side_length` - Distance in kilometers handed to the bounding box
/// * `projector` - Projection applied to each point, in ring order
///
/// # Returns
/// A closed ring of five projected points
pub fn project_bounding_square<P>(center: GeoPoint, side_length: f64, projector: &P) -> GeoResult<Polygon<ProjectedPoint>>
where
    P: PointProjector + ?Sized,
{
    let ring = bounding_square(center, side_length)?;
    let projected: Vec<ProjectedPoint> = ring.iter().map(|point| projector.project(point)).collect();

    Ok(Polygon::new(projected))
}

/// Build the bounding square in layer pixel coordinates of a map widget
pub fn project_bounding_square_layer<C>(center: GeoPoint, side_length: f64, converter: &C) -> GeoResult<Polygon<ProjectedPoint>>
where
    C: LayerPointConverter + ?Sized,
{
    project_bounding_square(center, side_length, &LayerPointProjector::new(converter))
}
