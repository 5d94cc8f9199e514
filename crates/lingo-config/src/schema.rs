//! Configuration schema definitions using serde.

use lingo_common::{LingoError, LogFormat, LoggingConfig, Result};
use lingo_i18n::{CatalogFormat, LangOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for Lingo.
///
/// Every section is optional in the file; missing values take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Resolution behavior.
    pub engine: EngineConfig,
    /// Where catalogs are loaded from.
    pub catalog: CatalogConfig,
    /// Logging output.
    pub logging: LogConfig,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Group used for keys without a known group prefix.
    pub default_group: String,
    /// Log malformed pluralization rules at warn level.
    pub warn_on_invalid_rules: bool,
}

/// Catalog locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Primary catalog file.
    pub path: Option<PathBuf>,
    /// Catalog used when no primary catalog is configured.
    pub fallback: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `lingo_i18n=debug`.
    pub level: String,
    /// `pretty`, `compact` or `json`.
    pub format: String,
    /// Write logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        self.catalog.validate()?;
        self.logging.validate()
    }

    /// Engine options for [`lingo_i18n::Lang`].
    pub fn lang_options(&self) -> LangOptions {
        LangOptions {
            default_group: self.engine.default_group.clone(),
            warn_on_invalid_rules: self.engine.warn_on_invalid_rules,
        }
    }

    /// Subscriber settings for [`lingo_common::init_logging`].
    pub fn logging_config(&self) -> Result<LoggingConfig> {
        Ok(LoggingConfig {
            level: self.logging.level.clone(),
            format: self.logging.log_format()?,
            file_path: self.logging.file.clone(),
            ..LoggingConfig::default()
        })
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<()> {
        if self.default_group.trim().is_empty() {
            return Err(LingoError::validation_field(
                "Default group cannot be empty",
                "engine.default_group",
            ));
        }

        // A dotted default group could never be addressed explicitly
        if self.default_group.contains('.') {
            return Err(LingoError::validation_field(
                format!("Default group '{}' cannot contain '.'", self.default_group),
                "engine.default_group",
            ));
        }

        Ok(())
    }
}

impl CatalogConfig {
    fn validate(&self) -> Result<()> {
        check_catalog_path(self.path.as_deref(), "catalog.path")?;
        check_catalog_path(self.fallback.as_deref(), "catalog.fallback")
    }
}

impl LogConfig {
    fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(LingoError::validation_field(
                "Log level cannot be empty",
                "logging.level",
            ));
        }
        self.log_format().map(|_| ())
    }

    /// The configured output format.
    pub fn log_format(&self) -> Result<LogFormat> {
        LogFormat::from_name(&self.format).ok_or_else(|| {
            LingoError::validation_field(
                format!(
                    "Unknown log format '{}', expected pretty, compact or json",
                    self.format
                ),
                "logging.format",
            )
        })
    }
}

fn check_catalog_path(path: Option<&Path>, field: &str) -> Result<()> {
    match path {
        Some(path) if CatalogFormat::from_path(path).is_none() => {
            Err(LingoError::validation_field(
                format!(
                    "Catalog {} must be a .json, .yaml, .yml or .toml file",
                    path.display()
                ),
                field,
            ))
        }
        _ => Ok(()),
    }
}
