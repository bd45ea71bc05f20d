//! Bounding square command

use clap::ArgMatches;
use log::info;

use crate::api::GeoBuffer;
use crate::commands::command_traits::Command;
use crate::commands::shape_args::ShapeArgs;
use crate::errors::GeoResult;
use crate::utils::config::Settings;

/// Command printing the closed bounding square ring
pub struct SquareCommand {
    args: ShapeArgs,
}

impl SquareCommand {
    /// Create a new square command
    pub fn new(args: &ArgMatches, settings: &Settings) -> GeoResult<Self> {
        Ok(SquareCommand {
            args: ShapeArgs::from_matches(args, settings)?,
        })
    }
}

impl Command for SquareCommand {
    fn execute(&self) -> GeoResult<()> {
        let geobuffer = GeoBuffer::new(self.args.settings.clone());
        let outline = geobuffer.square(self.args.center, self.args.distance, self.args.projection)?;
        info!("Square ring has {} points", outline.len());

        let rendered = geobuffer.render_outline(&outline, self.args.format)?;
        self.args.write_output(&rendered)
    }
}
