//! Error types for the library layer.

use std::fmt;

use crate::config::ConfigError;

/// Errors produced by the library layer: upstream client errors, local file
/// reads, configuration resolution and input validation.
///
/// Loading the repository never surfaces these; see
/// [`PostRepository::load`](crate::PostRepository::load).
#[derive(Debug)]
pub enum BreakdownsError {
    /// An error from the underlying posts client.
    Api(breakdowns_api::Error),
    /// Reading a local posts document failed.
    Io(std::io::Error),
    /// The configuration file could not be used.
    Config(ConfigError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for BreakdownsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Config(e) => write!(f, "Config error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for BreakdownsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<breakdowns_api::Error> for BreakdownsError {
    fn from(e: breakdowns_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<std::io::Error> for BreakdownsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for BreakdownsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
