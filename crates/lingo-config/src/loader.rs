//! Configuration loading with environment overrides.

use crate::schema::Config;
use lingo_common::{LingoError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "LINGO_";

/// Configuration loader.
///
/// The file format follows the extension (`.toml`, `.yaml` or `.yml`).
/// Recognized environment variables override values from the file:
///
/// | Variable | Field |
/// |---|---|
/// | `LINGO_DEFAULT_GROUP` | `engine.default_group` |
/// | `LINGO_WARN_INVALID_RULES` | `engine.warn_on_invalid_rules` |
/// | `LINGO_CATALOG` | `catalog.path` |
/// | `LINGO_FALLBACK_CATALOG` | `catalog.fallback` |
/// | `LINGO_LOG_LEVEL` | `logging.level` |
/// | `LINGO_LOG_FORMAT` | `logging.format` |
/// | `LINGO_LOG_FILE` | `logging.file` |
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Creates a loader that starts from defaults instead of a file.
    pub const fn defaults() -> Self {
        Self { path: None }
    }

    /// The file this loader reads, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the file, applies process environment overrides and validates.
    pub fn load(&self) -> Result<Config> {
        let vars = std::env::vars().filter(|(name, _)| name.starts_with(ENV_PREFIX));
        self.load_with_env(vars)
    }

    /// Like [`load`](Self::load), with overrides taken from `vars`.
    pub fn load_with_env<I>(&self, vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = match &self.path {
            Some(path) => Self::read_file(path)?,
            None => {
                debug!("No config file given, starting from defaults");
                Config::default()
            }
        };

        apply_overrides(&mut config, vars)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Config> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = fs::read_to_string(path).map_err(|e| {
            LingoError::config_with_source(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Config = match extension.as_deref() {
            Some("toml") => toml::from_str(&contents)?,
            Some("yaml" | "yml") => serde_yaml::from_str(&contents)?,
            _ => {
                return Err(LingoError::config(format!(
                    "Unsupported config file {}, expected .toml, .yaml or .yml",
                    path.display()
                )))
            }
        };

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Apply `LINGO_*` overrides. Unrecognized names are ignored; an empty
/// value for a path clears it.
pub fn apply_overrides<I>(config: &mut Config, vars: I) -> Result<()>
where
    I: IntoIterator<Item = (String, String)>,
{
    for (name, value) in vars {
        let Some(suffix) = name.strip_prefix(ENV_PREFIX) else {
            continue;
        };

        match suffix {
            "DEFAULT_GROUP" => config.engine.default_group = value,
            "WARN_INVALID_RULES" => {
                config.engine.warn_on_invalid_rules = parse_bool(&name, &value)?;
            }
            "CATALOG" => config.catalog.path = optional_path(value),
            "FALLBACK_CATALOG" => config.catalog.fallback = optional_path(value),
            "LOG_LEVEL" => config.logging.level = value,
            "LOG_FORMAT" => config.logging.format = value,
            "LOG_FILE" => config.logging.file = optional_path(value),
            _ => continue,
        }
        debug!("Applied environment override {}", name);
    }

    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LingoError::validation_field(
            format!("Expected a boolean, got '{value}'"),
            name,
        )),
    }
}

fn optional_path(value: String) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}
