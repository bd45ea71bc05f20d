//! Circle approximation command

use clap::ArgMatches;
use log::info;

use crate::api::GeoBuffer;
use crate::commands::command_traits::Command;
use crate::commands::shape_args::ShapeArgs;
use crate::errors::GeoResult;
use crate::utils::config::Settings;
use crate::utils::parse_utils::parse_count;

/// Command printing an open circle approximation
pub struct CircleCommand {
    args: ShapeArgs,
    /// Number of points on the circle
    intervals: usize,
}

impl CircleCommand {
    /// Create a new circle command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Defaults, including the number of intervals
    pub fn new(args: &ArgMatches, settings: &Settings) -> GeoResult<Self> {
        let intervals = match args.get_one::<String>("intervals") {
            Some(value) => parse_count(value, "intervals")?,
            None => settings.intervals,
        };

        Ok(CircleCommand {
            args: ShapeArgs::from_matches(args, settings)?,
            intervals,
        })
    }
}

impl Command for CircleCommand {
    fn execute(&self) -> GeoResult<()> {
        let geobuffer = GeoBuffer::new(self.args.settings.clone());
        let outline = geobuffer.circle(
            self.args.center,
            self.args.distance,
            self.args.projection,
            Some(self.intervals),
        )?;
        info!("Circle has {} points", outline.len());

        let rendered = geobuffer.render_outline(&outline, self.args.format)?;
        self.args.write_output(&rendered)
    }
}
