//! Error types for the CLI

use quadcalc::prelude::{CalcError, LexError, SessionError};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Expression failed to evaluate
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// Keypad input had a character with no button
    #[error("{0}")]
    Session(#[from] SessionError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<LexError> for CliError {
    fn from(err: LexError) -> Self {
        Self::Calc(err.into())
    }
}
