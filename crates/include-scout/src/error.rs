//! Error types for include-scout operations.
//!
//! ## Error Philosophy
//!
//! The include traversals themselves never fail:
//! - An unreadable file contributes zero directives
//! - An include that resolves to nothing is a *result*, not an error
//! - Malformed directives are skipped, cyclic includes stop at the visited set
//!
//! `Error` therefore only covers the surfaces around the core: loading and
//! saving configuration, writing output, and validating user-supplied paths.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for include-scout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for include-scout operations.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or serialized
    #[error("configuration file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// A user-supplied path is unusable
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },
}

impl Error {
    /// Create an invalid-path error.
    #[must_use]
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_display_includes_path_and_reason() {
        let error = Error::invalid_path("/no/such/dir", "does not exist");

        let display = error.to_string();
        assert!(display.contains("/no/such/dir"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn io_error_converts_and_keeps_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing config");
        let error: Error = io.into();

        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("missing config"));
    }

    #[test]
    fn yaml_error_converts() {
        let parse: std::result::Result<Vec<u32>, _> = serde_yaml::from_str("[1, two");
        let error: Error = parse.unwrap_err().into();

        assert!(matches!(error, Error::Yaml(_)));
        assert!(error.to_string().starts_with("configuration file error"));
    }
}
