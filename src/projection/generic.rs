//! Adapter for plain projection functions taking and returning coordinate pairs

use crate::coordinate::{GeoPoint, ProjectedPoint};
use super::projector::PointProjector;

/// Order of the two components handed to a projection function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrder {
    /// `[lat, lon]`
    #[default]
    LatLon,
    /// `[lon, lat]`, as expected by d3-style geographic projections
    LonLat,
}

/// Wraps a `Fn([f64; 2]) -> [f64; 2]` projection function
///
/// # Examples
/// ```
/// use geobuffer::projection::{FnProjector, PointProjector};
/// use geobuffer::coordinate::GeoPoint;
///
/// let doubled = FnProjector::new(|p: [f64; 2]| [p[0] * 2.0, p[1] * 2.0]);
/// let projected = doubled.project(&GeoPoint::new(1.0, 2.0));
/// assert_eq!(projected.as_pair(), [2.0, 4.0]);
/// ```
#[derive(Clone)]
pub struct FnProjector<F> {
    projection: F,
    order: AxisOrder,
}

impl<F> FnProjector<F>
where
    F: Fn([f64; 2]) -> [f64; 2],
{
    /// Wrap a function receiving `[lat, lon]`
    pub fn new(projection: F) -> Self {
        FnProjector {
            projection,
            order: AxisOrder::LatLon,
        }
    }

    /// Wrap a function receiving `[lon, lat]`
    pub fn lon_lat(projection: F) -> Self {
        FnProjector {
            projection,
            order: AxisOrder::LonLat,
        }
    }

    /// The axis order this adapter uses
    pub fn order(&self) -> AxisOrder {
        self.order
    }
}

impl<F> PointProjector for FnProjector<F>
where
    F: Fn([f64; 2]) -> [f64; 2],
{
    fn project(&self, point: &GeoPoint) -> ProjectedPoint {
        let input = match self.order {
            AxisOrder::LatLon => point.as_lat_lon(),
            AxisOrder::LonLat => point.as_lon_lat(),
        };
        ProjectedPoint::from((self.projection)(input))
    }
}
