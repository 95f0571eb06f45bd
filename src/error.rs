//! Error types for doxpanel library.
//!
//! The transformation passes themselves never fail; these errors come from
//! the edges: reading and writing pages, detection, and serialization.

use std::io;
use thiserror::Error;

/// Result type alias for doxpanel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing generated pages.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page was not produced by Doxygen.
    #[error("Not a Doxygen page: {0}")]
    NotDoxygen(String),

    /// Error serializing the page tree or a report to JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// A path that cannot be processed (missing, not a directory, ...).
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotDoxygen("index.html".to_string());
        assert_eq!(err.to_string(), "Not a Doxygen page: index.html");

        let err = Error::InvalidPath("docs/html".to_string());
        assert_eq!(err.to_string(), "Invalid path: docs/html");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
