//! Error handling module for the gqlt CLI.
//!
//! Lexical errors are not listed here: they are reported as diagnostics and
//! only change the exit status. These are the failures that stop a command
//! before or while it reads its input.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the gqlt CLI application.
#[derive(Error, Debug)]
pub enum GqltError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input document cannot be read.
    #[error("Cannot read {}: {source}", .path.display())]
    ReadInput {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a token span does not fit its source file.
    #[error("Source error: {0}")]
    Source(#[from] gqlc_util::SourceError),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GqltError.
pub type Result<T> = std::result::Result<T, GqltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = GqltError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_read_input_error_display() {
        let err = GqltError::ReadInput {
            path: PathBuf::from("query.graphql"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "Cannot read query.graphql: file not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let gqlt_err: GqltError = io_err.into();
        assert!(matches!(gqlt_err, GqltError::Io(_)));
    }

    #[test]
    fn test_source_error_conversion() {
        let source_err = gqlc_util::SourceError::InvalidRange { start: 3, end: 1 };
        let gqlt_err: GqltError = source_err.into();
        assert_eq!(gqlt_err.to_string(), "Source error: Invalid range: start 3 > end 1");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let gqlt_err: GqltError = json_err.into();
        assert!(matches!(gqlt_err, GqltError::Json(_)));
    }
}
