//! Error types for pomoclock.

use thiserror::Error;

/// Errors that can surface from the clock's host environment.
///
/// Invalid clock commands never produce an error; they are ignored.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Configuration could not be resolved, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or restored.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Serialized data could not be produced or read back.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A command-line value was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ClockError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for ClockError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}
