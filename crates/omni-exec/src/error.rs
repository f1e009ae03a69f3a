//! Error types for subprocess operations

use crate::interpreter::PYTHON_ENV;

/// Errors that can occur while launching external programs
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The executable does not exist or is not on PATH
    #[error("'{program}' not found")]
    NotFound {
        /// Program that was looked up
        program: String,
    },

    /// No interpreter candidate could be started
    #[error(
        "Python not found (tried: {}). Please install Python 3 and ensure 'python' works, or set {} to your interpreter path.",
        .tried.join(", "),
        PYTHON_ENV
    )]
    InterpreterNotFound {
        /// Candidates tried, in order
        tried: Vec<String>,
    },

    /// The program exists but could not be started
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExecError {
    /// Whether this error means "executable not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InterpreterNotFound { .. })
    }
}

/// Result type alias for subprocess operations
pub type Result<T> = std::result::Result<T, ExecError>;
