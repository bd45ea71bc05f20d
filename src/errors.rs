//! Custom error types for geodesic buffer computations

use std::fmt;
use std::io;

/// Error types produced by the crate
#[derive(Debug)]
pub enum GeoBufferError {
    /// A precondition on the arguments was violated (negative distance, zero intervals)
    InvalidArgument(String),
    /// I/O error while writing output or logs
    IoError(io::Error),
    /// Settings file could not be read or interpreted
    ConfigError(String),
    /// A command-line value could not be parsed
    ParseError(String),
}

impl fmt::Display for GeoBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoBufferError::InvalidArgument(msg) => write!(f, "Illegal arguments: {}", msg),
            GeoBufferError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoBufferError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoBufferError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for GeoBufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoBufferError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoBufferError {
    fn from(error: io::Error) -> Self {
        GeoBufferError::IoError(error)
    }
}

impl From<toml::de::Error> for GeoBufferError {
    fn from(error: toml::de::Error) -> Self {
        GeoBufferError::ConfigError(error.to_string())
    }
}

/// Result type for geodesic buffer operations
pub type GeoResult<T> = Result<T, GeoBufferError>;

impl GeoBufferError {
    /// Whether this error signals a violated argument precondition
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GeoBufferError::InvalidArgument(_))
    }
}
