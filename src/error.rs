//! Application error types.
//!
//! Provides unified error handling with path context for actionable
//! diagnostics. Per-file errors are reported and never abort a batch.

use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// No candidate encoding could decode the file
    #[error("could not decode {path:?} with any candidate encoding")]
    Decode {
        /// File that failed to decode.
        path: PathBuf,
    },

    /// The requested encoding label is not recognized
    #[error("unknown encoding label: {0:?}")]
    UnknownEncoding(String),

    /// Input path error with guidance
    #[error("Input error: {message}. {hint}")]
    Input {
        /// Description of the input problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Failed to write a converted file
    #[error("write failed for {path:?}: {source}")]
    Write {
        /// The underlying IO error.
        source: std::io::Error,
        /// Destination path of the failed write.
        path: PathBuf,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an input error with actionable hint
    pub fn input(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Input { message: message.into(), hint }
    }

    /// Create a write error for the given destination
    pub fn write(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write { source, path: path.into() }
    }
}

// Convenience conversion for plain IO failures with no path at hand
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
