//! Drawable outlines around a center point
//!
//! Squares come back as closed rings of five points. Circles come back open,
//! with exactly `n_intervals` points; callers that need a closed ring can use
//! [`crate::coordinate::Polygon::closed`].

mod circle;
mod square;
#[cfg(test)]
mod tests;

pub use self::circle::{circle_points, project_circle, project_circle_layer};
pub use self::square::{bounding_square, project_bounding_square, project_bounding_square_layer};
