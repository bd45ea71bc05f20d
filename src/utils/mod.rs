//! Utility modules for common functionality
//!
//! Logging, settings, command line parsing and output formatting used by the
//! command line front end.

pub mod logger;
pub mod config;
pub mod parse_utils;
pub mod format_utils;
pub mod antimeridian;
