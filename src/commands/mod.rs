//! CLI command implementations
//!
//! This module contains implementations of the shape commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod shape_args;
pub mod bbox_command;
pub mod square_command;
pub mod circle_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use bbox_command::BoundingBoxCommand;
pub use square_command::SquareCommand;
pub use circle_command::CircleCommand;

use clap::ArgMatches;
use crate::errors::{GeoBufferError, GeoResult};
use crate::utils::config::Settings;

/// Factory for creating command instances based on CLI arguments
///
/// The `shape` positional argument selects the command.
pub struct GeoBufferCommandFactory;

impl GeoBufferCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoBufferCommandFactory
    }
}

impl Default for GeoBufferCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for GeoBufferCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &Settings) -> GeoResult<Box<dyn Command>> {
        let shape = args.get_one::<String>("shape")
            .ok_or_else(|| GeoBufferError::ParseError("Missing shape".to_string()))?;

        match shape.as_str() {
            "bbox" => Ok(Box::new(BoundingBoxCommand::new(args, settings)?)),
            "square" => Ok(Box::new(SquareCommand::new(args, settings)?)),
            "circle" => Ok(Box::new(CircleCommand::new(args, settings)?)),
            other => Err(GeoBufferError::ParseError(format!("Unknown shape: {}", other))),
        }
    }
}
