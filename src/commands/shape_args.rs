//! Arguments shared by all shape commands

use std::fs::File;
use std::io::{self, Write};
use clap::ArgMatches;
use log::{debug, info};

use crate::coordinate::GeoPoint;
use crate::errors::{GeoBufferError, GeoResult};
use crate::projection::{ProjectionFactory, ProjectionKind};
use crate::utils::config::Settings;
use crate::utils::format_utils::OutputFormat;
use crate::utils::parse_utils::{parse_center, parse_number, parse_origin};

/// Parsed arguments common to the bbox, square and circle commands
#[derive(Debug, Clone)]
pub struct ShapeArgs {
    /// Center point
    pub center: GeoPoint,
    /// Distance, side length or radius in kilometers
    pub distance: f64,
    /// Projection to apply
    pub projection: ProjectionKind,
    /// Output format
    pub format: OutputFormat,
    /// Output file, stdout when absent
    pub output: Option<String>,
    /// Settings with command line overrides applied
    pub settings: Settings,
}

impl ShapeArgs {
    /// Parse the shared arguments, falling back to `settings`
    pub fn from_matches(args: &ArgMatches, settings: &Settings) -> GeoResult<Self> {
        let center_str = args.get_one::<String>("center")
            .ok_or_else(|| GeoBufferError::ParseError("Missing --center".to_string()))?;
        let center = parse_center(center_str)?;

        let distance_str = args.get_one::<String>("distance")
            .ok_or_else(|| GeoBufferError::ParseError("Missing --distance".to_string()))?;
        let distance = parse_number(distance_str, "distance")?;

        let mut settings = settings.clone();
        if let Some(zoom) = args.get_one::<String>("zoom") {
            settings.zoom = parse_number(zoom, "zoom")?;
        }
        if let Some(origin) = args.get_one::<String>("origin") {
            settings.origin = parse_origin(origin)?;
        }

        let projection_name = args.get_one::<String>("projection")
            .cloned()
            .unwrap_or_else(|| settings.projection.clone());
        let projection = ProjectionFactory::from_name(&projection_name)?;

        let format = match args.get_one::<String>("format") {
            Some(name) => OutputFormat::from_name(name)?,
            None => settings.format,
        };

        let output = args.get_one::<String>("output").cloned();

        debug!("Shape arguments: center={:?}, distance={}, projection={:?}, format={}",
               center, distance, projection, format.name());

        Ok(ShapeArgs {
            center,
            distance,
            projection,
            format,
            output,
            settings,
        })
    }

    /// Write rendered output to the output file or stdout
    pub fn write_output(&self, content: &str) -> GeoResult<()> {
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(content.as_bytes())?;
                info!("Wrote output to {}", path);
            },
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(content.as_bytes())?;
                handle.flush()?;
            },
        }
        Ok(())
    }
}
