//! Bounding box command

use clap::ArgMatches;
use log::{info, warn};

use crate::api::GeoBuffer;
use crate::commands::command_traits::Command;
use crate::commands::shape_args::ShapeArgs;
use crate::errors::GeoResult;
use crate::utils::config::Settings;

/// Command printing the geodesic bounding box around a center
pub struct BoundingBoxCommand {
    args: ShapeArgs,
}

impl BoundingBoxCommand {
    /// Create a new bounding box command
    pub fn new(args: &ArgMatches, settings: &Settings) -> GeoResult<Self> {
        Ok(BoundingBoxCommand {
            args: ShapeArgs::from_matches(args, settings)?,
        })
    }
}

impl Command for BoundingBoxCommand {
    fn execute(&self) -> GeoResult<()> {
        let geobuffer = GeoBuffer::new(self.args.settings.clone());
        let bbox = geobuffer.bounding_box(self.args.center, self.args.distance)?;

        if bbox.crosses_antimeridian() {
            warn!("Bounding box crosses the antimeridian: min_lon {} > max_lon {}", bbox.min_lon, bbox.max_lon);
        } else if bbox.spans_all_longitudes() {
            info!("Bounding box contains a pole and spans all longitudes");
        }

        let rendered = geobuffer.render_bounding_box(&bbox, self.args.format);
        self.args.write_output(&rendered)
    }
}
