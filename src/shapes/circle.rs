//! Circle approximations built from equally spaced destination points

use log::debug;

use crate::coordinate::{compute_destination, GeoPoint, Outline, Polygon, ProjectedPoint};
use crate::errors::{GeoBufferError, GeoResult};
use crate::projection::{LayerPointConverter, LayerPointProjector, PointProjector};

/// Compute `n_intervals` points at `radius` km from `center`
///
/// Point `i` lies at bearing `i * (360 / n_intervals)` degrees. The polygon
/// is open: the first point is not repeated at the end.
///
/// # Errors
/// `InvalidArgument` when `n_intervals` is zero
pub fn circle_points(center: GeoPoint, radius: f64, n_intervals: usize) -> GeoResult<Polygon<GeoPoint>> {
    if n_intervals == 0 {
        return Err(GeoBufferError::InvalidArgument(
            "a circle needs at least one interval".to_string()));
    }

    let interval_angle = 360.0 / n_intervals as f64;
    debug!("Approximating circle of {} km around ({}, {}) with {} points every {} degrees",
           radius, center.lat, center.lon, n_intervals, interval_angle);

    let points = (0..n_intervals)
        .map(|i| compute_destination(center, i as f64 * interval_angle, radius))
        .collect();

    Ok(Polygon::new(points))
}

/// Approximate a circle, projecting the points when a projector is supplied
///
/// Without a projector the raw geographic points are returned. A bare `None`
/// leaves `P` unknown, so name any projector type, or call [`circle_points`]
/// directly for unprojected points.
///
/// ```
/// use geobuffer::coordinate::GeoPoint;
/// use geobuffer::projection::IdentityProjection;
/// use geobuffer::shapes::{circle_points, project_circle};
///
/// let center = GeoPoint::new(52.52, 13.40);
/// let outline = project_circle(center, 5.0, None::<&IdentityProjection>, 8).unwrap();
///
/// assert!(outline.is_geographic());
/// assert_eq!(outline.as_pairs(), circle_points(center, 5.0, 8).unwrap().map(|p| p.as_lat_lon()).into_points());
/// ```
///
/// # Arguments
/// * `center` - Center point in degrees
/// * `radius` - Radius in kilometers
/// * `projector` - Optional projection applied to each point
/// * `n_intervals` - Number of points, at least one
pub fn project_circle<P>(center: GeoPoint, radius: f64, projector: Option<&P>, n_intervals: usize) -> GeoResult<Outline>
where
    P: PointProjector + ?Sized,
{
    let points = circle_points(center, radius, n_intervals)?;

    match projector {
        Some(projector) => Ok(Outline::Projected(points.map(|point| projector.project(point)))),
        None => Ok(Outline::Geographic(points)),
    }
}

/// Approximate a circle in layer pixel coordinates of a map widget
///
/// Unlike [`project_circle`] there is no unprojected fallback.
pub fn project_circle_layer<C>(center: GeoPoint, radius: f64, converter: &C, n_intervals: usize) -> GeoResult<Polygon<ProjectedPoint>>
where
    C: LayerPointConverter + ?Sized,
{
    let projector = LayerPointProjector::new(converter);
    let points = circle_points(center, radius, n_intervals)?;

    Ok(points.map(|point| projector.project(point)))
}
