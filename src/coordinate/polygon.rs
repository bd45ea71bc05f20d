//! Ordered point sequences describing drawable outlines

use super::point::{GeoPoint, ProjectedPoint};

/// An ordered sequence of points; insertion order is drawing order
///
/// Rings produced for squares are closed (the first point is repeated at the
/// end), while circle approximations are left open.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
    points: Vec<T>,
}

impl<T> Polygon<T> {
    /// Create a polygon from points in drawing order
    pub fn new(points: Vec<T>) -> Self {
        Polygon { points }
    }

    /// Number of points, including a repeated closing point
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in drawing order
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Iterate over the points in drawing order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    /// Consume the polygon and return its points
    pub fn into_points(self) -> Vec<T> {
        self.points
    }

    /// Map every point, keeping the order
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Polygon<U> {
        Polygon::new(self.points.iter().map(f).collect())
    }
}

impl<T: PartialEq> Polygon<T> {
    /// Whether the last point repeats the first
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }
}

impl<T: Clone + PartialEq> Polygon<T> {
    /// A closed copy of this polygon, appending the first point if needed
    pub fn closed(&self) -> Polygon<T> {
        let mut points = self.points.clone();
        if !self.is_closed() {
            if let Some(first) = points.first().cloned() {
                points.push(first);
            }
        }
        Polygon::new(points)
    }
}

impl<'a, T> IntoIterator for &'a Polygon<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A point sequence that may or may not have been projected
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Geographic points, returned when no projection was supplied
    Geographic(Polygon<GeoPoint>),
    /// Points mapped through a projection
    Projected(Polygon<ProjectedPoint>),
}

impl Outline {
    /// Number of points in the path
    pub fn len(&self) -> usize {
        match self {
            Outline::Geographic(polygon) => polygon.len(),
            Outline::Projected(polygon) => polygon.len(),
        }
    }

    /// Whether the path has no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points as coordinate pairs (`[lat, lon]` or `[x, y]`)
    pub fn as_pairs(&self) -> Vec<[f64; 2]> {
        match self {
            Outline::Geographic(polygon) => polygon.iter().map(|p| p.as_lat_lon()).collect(),
            Outline::Projected(polygon) => polygon.iter().map(|p| p.as_pair()).collect(),
        }
    }

    /// Whether the points are still geographic
    pub fn is_geographic(&self) -> bool {
        matches!(self, Outline::Geographic(_))
    }
}
