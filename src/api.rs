use log::info;

use crate::coordinate::{compute_bounding_box, BoundingBox, GeoPoint, Outline};
use crate::errors::GeoResult;
use crate::projection::{ProjectionFactory, ProjectionKind, WebMercatorLayer};
use crate::shapes::{bounding_square, project_bounding_square, project_bounding_square_layer,
                    project_circle, project_circle_layer};
use crate::utils::config::Settings;
use crate::utils::format_utils::{format_bounding_box, format_geo_points, format_projected_points, OutputFormat};

/// Main interface to the geobuffer library
///
/// Selects projections by kind, fills in defaults from [`Settings`] and
/// renders results as text.
pub struct GeoBuffer {
    settings: Settings,
}

impl GeoBuffer {
    /// Create a new GeoBuffer instance
    ///
    /// # Arguments
    /// * `settings` - Defaults for intervals, layer projection and output
    pub fn new(settings: Settings) -> Self {
        GeoBuffer { settings }
    }

    /// Settings in use
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The layer-point converter described by the settings
    pub fn layer(&self) -> WebMercatorLayer {
        WebMercatorLayer::new(self.settings.zoom, self.settings.origin)
    }

    /// Compute the geodesic bounding box around a center
    ///
    /// # Arguments
    /// * `center` - Center point in degrees
    /// * `distance` - Distance in kilometers
    pub fn bounding_box(&self, center: GeoPoint, distance: f64) -> GeoResult<BoundingBox> {
        let bbox = compute_bounding_box(center, distance)?;
        info!("Bounding box around ({}, {}) at {} km: {:?}", center.lat, center.lon, distance, bbox.as_tuple());
        Ok(bbox)
    }

    /// Build the closed bounding square ring
    ///
    /// # Arguments
    /// * `center` - Center point in degrees
    /// * `side_length` - Distance in kilometers handed to the bounding box
    /// * `kind` - Projection to apply; `None` keeps geographic points
    pub fn square(&self, center: GeoPoint, side_length: f64, kind: ProjectionKind) -> GeoResult<Outline> {
        info!("Building bounding square around ({}, {}) with {} km using {}",
              center.lat, center.lon, side_length, kind.description());

        if kind.is_layer() {
            let layer = self.layer();
            return Ok(Outline::Projected(project_bounding_square_layer(center, side_length, &layer)?));
        }

        match ProjectionFactory::create_projector(kind) {
            Some(projector) => Ok(Outline::Projected(project_bounding_square(center, side_length, projector.as_ref())?)),
            None => Ok(Outline::Geographic(bounding_square(center, side_length)?)),
        }
    }

    /// Approximate a circle with equally spaced destination points
    ///
    /// # Arguments
    /// * `center` - Center point in degrees
    /// * `radius` - Radius in kilometers
    /// * `kind` - Projection to apply; `None` keeps geographic points
    /// * `n_intervals` - Number of points, or the configured default
    pub fn circle(&self, center: GeoPoint, radius: f64, kind: ProjectionKind, n_intervals: Option<usize>) -> GeoResult<Outline> {
        let n_intervals = n_intervals.unwrap_or(self.settings.intervals);
        info!("Approximating circle around ({}, {}) with {} km radius, {} points, using {}",
              center.lat, center.lon, radius, n_intervals, kind.description());

        if kind.is_layer() {
            let layer = self.layer();
            return Ok(Outline::Projected(project_circle_layer(center, radius, &layer, n_intervals)?));
        }

        let projector = ProjectionFactory::create_projector(kind);
        project_circle(center, radius, projector.as_deref(), n_intervals)
    }

    /// Render an outline in the given format
    pub fn render_outline(&self, outline: &Outline, format: OutputFormat) -> GeoResult<String> {
        match outline {
            Outline::Geographic(polygon) => format_geo_points(polygon, format, self.settings.precision),
            Outline::Projected(polygon) => format_projected_points(polygon, format, self.settings.precision),
        }
    }

    /// Render a bounding box in the given format
    pub fn render_bounding_box(&self, bbox: &BoundingBox, format: OutputFormat) -> String {
        format_bounding_box(bbox, format, self.settings.precision)
    }
}

impl Default for GeoBuffer {
    fn default() -> Self {
        GeoBuffer::new(Settings::defaults())
    }
}
