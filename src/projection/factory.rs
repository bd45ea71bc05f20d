//! Factory for selecting projections by name

use crate::errors::{GeoBufferError, GeoResult};
use super::projector::{IdentityProjection, PointProjector};
use super::web_mercator::WebMercatorProjection;

/// Identifier for the projections available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Leave points geographic (circles only)
    None,
    /// Pass coordinates through as `(lat, lon)`
    Identity,
    /// Web Mercator meters (EPSG:3857)
    WebMercator,
    /// Web Mercator layer pixels, through the layer-point convention
    Layer,
}

impl ProjectionKind {
    /// Get a description of this projection
    pub fn description(&self) -> String {
        match self {
            ProjectionKind::None => "none (geographic degrees)".to_string(),
            ProjectionKind::Identity => "identity (lat, lon)".to_string(),
            ProjectionKind::WebMercator => "Web Mercator (EPSG:3857)".to_string(),
            ProjectionKind::Layer => "Web Mercator layer points".to_string(),
        }
    }

    /// Whether this projection uses the layer-point calling convention
    pub fn is_layer(&self) -> bool {
        matches!(self, ProjectionKind::Layer)
    }
}

/// Factory for creating projections
pub struct ProjectionFactory;

impl ProjectionFactory {
    /// Look up a projection by name
    pub fn from_name(name: &str) -> GeoResult<ProjectionKind> {
        match name.trim().to_lowercase().as_str() {
            "none" | "raw" | "geographic" => Ok(ProjectionKind::None),
            "identity" => Ok(ProjectionKind::Identity),
            "mercator" | "web-mercator" | "webmercator" | "3857" | "epsg:3857" => Ok(ProjectionKind::WebMercator),
            "layer" | "leaflet" => Ok(ProjectionKind::Layer),
            _ => Err(GeoBufferError::ParseError(format!("Unknown projection: {}", name))),
        }
    }

    /// Create a point projector for kinds that use the generic convention
    ///
    /// Returns `None` for [`ProjectionKind::None`] and [`ProjectionKind::Layer`],
    /// which have no generic projector.
    pub fn create_projector(kind: ProjectionKind) -> Option<Box<dyn PointProjector>> {
        match kind {
            ProjectionKind::Identity => Some(Box::new(IdentityProjection)),
            ProjectionKind::WebMercator => Some(Box::new(WebMercatorProjection)),
            ProjectionKind::None | ProjectionKind::Layer => None,
        }
    }

    /// Names accepted by [`ProjectionFactory::from_name`]
    pub fn available_names() -> Vec<&'static str> {
        vec!["none", "identity", "mercator", "layer"]
    }
}
