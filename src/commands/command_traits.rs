//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::errors::GeoResult;
use crate::utils::config::Settings;

/// Represents an executable command in the application
///
/// Command objects hold fully parsed arguments, so `execute` only computes
/// and writes output.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> GeoResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `settings` - Defaults for flags that were not given
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, settings: &Settings) -> GeoResult<Box<dyn Command>>;
}
