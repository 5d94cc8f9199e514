//! Default values for every configuration section.

use crate::schema::{CatalogConfig, Config, EngineConfig, LogConfig};
use lingo_i18n::DEFAULT_GROUP;

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log format name.
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            catalog: CatalogConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_group: DEFAULT_GROUP.to_string(),
            warn_on_invalid_rules: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: DEFAULT_LOG_FORMAT.to_string(),
            file: None,
        }
    }
}
