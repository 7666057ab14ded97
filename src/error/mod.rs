// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cmlint.
//!
//! Loading and rendering are the only fallible operations. Problems with a
//! well-formed record are reported as data by [`crate::rules::validate`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum CmlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Output errors
    #[error("Failed to render {format} configuration: {message}")]
    Render { format: String, message: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, CmlintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/.commitlintrc.json"),
        };
        assert!(err.to_string().contains("/path/to/.commitlintrc.json"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "severity".to_string(),
            message: "3 is not one of 0, 1, 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'severity': 3 is not one of 0, 1, 2"
        );
    }

    #[test]
    fn test_cmlint_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            message: "expected an array".to_string(),
        };
        let err: CmlintError = config_err.into();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn test_render_error_display() {
        let err = CmlintError::Render {
            format: "toml".to_string(),
            message: "unsupported value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to render toml configuration: unsupported value"
        );
    }
}
