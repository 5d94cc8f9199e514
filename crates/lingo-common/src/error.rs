//! Error types and utilities shared across Lingo crates

use thiserror::Error;

/// Result type alias for Lingo operations
pub type Result<T> = std::result::Result<T, LingoError>;

/// Main error type for configuration and application-level failures
#[derive(Error, Debug)]
pub enum LingoError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors for user input or configuration values
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl LingoError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Name of the offending field, for validation errors that carry one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

/// Convert from toml::de::Error to LingoError
impl From<toml::de::Error> for LingoError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

/// Convert from serde_yaml::Error to LingoError
impl From<serde_yaml::Error> for LingoError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = LingoError::config("config issue");
        assert_eq!(config_error.to_string(), "Configuration error: config issue");

        let validation_error = LingoError::validation_field("must not be empty", "engine.default_group");
        assert!(validation_error.to_string().contains("Validation error"));
        assert_eq!(validation_error.field(), Some("engine.default_group"));
        assert_eq!(config_error.field(), None);
    }

    #[test]
    fn test_error_with_source() {
        let config_source_error = LingoError::config_with_source(
            "Config loading failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(config_source_error.to_string().contains("Config loading failed"));
        assert!(config_source_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lingo_error: LingoError = io_error.into();

        assert!(lingo_error.to_string().contains("I/O error"));
        assert!(lingo_error.source().is_some());
    }

    #[test]
    fn test_parser_error_conversions() {
        let toml_error = toml::from_str::<toml::Value>("key = ").unwrap_err();
        let lingo_error: LingoError = toml_error.into();
        assert_eq!(lingo_error.to_string(), "Configuration error: TOML parsing error");

        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let lingo_error: LingoError = yaml_error.into();
        assert_eq!(lingo_error.to_string(), "Configuration error: YAML parsing error");
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = LingoError::from(root_error);
        let top_error = LingoError::config_with_source("Top layer", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert_eq!(error_count, 2);
        assert_eq!(current_error.to_string(), "Root cause");
    }
}
