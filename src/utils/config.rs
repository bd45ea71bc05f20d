//! Settings for the command line front end
//!
//! Built-in defaults are embedded from `geobuffer.toml` and parsed once. A
//! user settings file overlays them key by key.

use std::fs;
use lazy_static::lazy_static;
use log::debug;

use crate::coordinate::ProjectedPoint;
use crate::errors::{GeoBufferError, GeoResult};
use crate::utils::format_utils::OutputFormat;

lazy_static! {
    static ref DEFAULT_SETTINGS: Settings = {
        let content = include_str!("../../geobuffer.toml");
        Settings::fallback().overlay_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in settings: {}", e);
            Settings::fallback()
        })
    };
}

/// Settings used when a command line flag is not given
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Number of points approximating a circle
    pub intervals: usize,
    /// Projection name, resolved through `ProjectionFactory`
    pub projection: String,
    /// Zoom level of the layer projection
    pub zoom: f64,
    /// Pixel origin of the layer projection
    pub origin: ProjectedPoint,
    /// Output format
    pub format: OutputFormat,
    /// Digits after the decimal point
    pub precision: usize,
}

impl Settings {
    /// The built-in defaults
    pub fn defaults() -> Settings {
        DEFAULT_SETTINGS.clone()
    }

    /// Load the defaults, overlaid with `path` when given
    pub fn load(path: Option<&str>) -> GeoResult<Settings> {
        match path {
            Some(path) => {
                debug!("Loading settings from {}", path);
                Self::defaults().overlay_file(path)
            },
            None => Ok(Self::defaults()),
        }
    }

    /// Overlay the keys of a TOML file on these settings
    pub fn overlay_file(self, path: &str) -> GeoResult<Settings> {
        let contents = fs::read_to_string(path)?;
        self.overlay_str(&contents)
    }

    /// Overlay the keys of a TOML document on these settings
    pub fn overlay_str(mut self, content: &str) -> GeoResult<Settings> {
        let toml_value: toml::Value = content.parse()?;

        if let Some(intervals) = get_integer(&toml_value, "circle", "intervals")? {
            if intervals <= 0 {
                return Err(GeoBufferError::ConfigError(format!(
                    "circle.intervals must be positive, got {}", intervals)));
            }
            self.intervals = intervals as usize;
        }

        if let Some(projection) = get_string(&toml_value, "projection", "default")? {
            self.projection = projection;
        }
        if let Some(zoom) = get_float(&toml_value, "projection", "zoom")? {
            self.zoom = zoom;
        }
        if let Some(x) = get_float(&toml_value, "projection", "origin_x")? {
            self.origin.x = x;
        }
        if let Some(y) = get_float(&toml_value, "projection", "origin_y")? {
            self.origin.y = y;
        }

        if let Some(format) = get_string(&toml_value, "output", "format")? {
            self.format = OutputFormat::from_name(&format)
                .map_err(|e| GeoBufferError::ConfigError(e.to_string()))?;
        }
        if let Some(precision) = get_integer(&toml_value, "output", "precision")? {
            if !(0..=17).contains(&precision) {
                return Err(GeoBufferError::ConfigError(format!(
                    "output.precision must be between 0 and 17, got {}", precision)));
            }
            self.precision = precision as usize;
        }

        Ok(self)
    }

    /// Settings used if the embedded defaults cannot be parsed
    fn fallback() -> Settings {
        Settings {
            intervals: 64,
            projection: "identity".to_string(),
            zoom: 0.0,
            origin: ProjectedPoint::new(0.0, 0.0),
            format: OutputFormat::Csv,
            precision: 6,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::defaults()
    }
}

fn lookup<'a>(toml_value: &'a toml::Value, table: &str, key: &str) -> Option<&'a toml::Value> {
    toml_value.get(table).and_then(|t| t.get(key))
}

fn type_error(table: &str, key: &str, expected: &str) -> GeoBufferError {
    GeoBufferError::ConfigError(format!("{}.{} must be {}", table, key, expected))
}

fn get_integer(toml_value: &toml::Value, table: &str, key: &str) -> GeoResult<Option<i64>> {
    match lookup(toml_value, table, key) {
        None => Ok(None),
        Some(value) => value.as_integer()
            .map(Some)
            .ok_or_else(|| type_error(table, key, "an integer")),
    }
}

fn get_float(toml_value: &toml::Value, table: &str, key: &str) -> GeoResult<Option<f64>> {
    match lookup(toml_value, table, key) {
        None => Ok(None),
        Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
        Some(value) => value.as_float()
            .map(Some)
            .ok_or_else(|| type_error(table, key, "a number")),
    }
}

fn get_string(toml_value: &toml::Value, table: &str, key: &str) -> GeoResult<Option<String>> {
    match lookup(toml_value, table, key) {
        None => Ok(None),
        Some(value) => value.as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| type_error(table, key, "a string")),
    }
}
