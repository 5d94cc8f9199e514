//! Structured logging infrastructure for Lingo

use crate::error::{LingoError, Result};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, colored output for terminals
    #[default]
    Pretty,
    /// Single-line output
    Compact,
    /// Newline-delimited JSON
    Json,
}

impl LogFormat {
    /// Parse a format name as it appears in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "lingo_i18n=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    fn env_filter(&self) -> EnvFilter {
        // RUST_LOG wins over the configured level
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn open_log_file(&self) -> Result<Option<Mutex<File>>> {
        self.file_path
            .as_ref()
            .map(|path| OpenOptions::new().create(true).append(true).open(path).map(Mutex::new))
            .transpose()
            .map_err(LingoError::from)
    }
}

/// Initialize the tracing subscriber with the given configuration
///
/// Fails if a global subscriber is already installed or the log file
/// cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let file = config.open_log_file()?;

    let installed = match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_span_events(config.span_events())
                .with_target(config.include_targets);

            match file {
                Some(file) => registry.with(layer.with_writer(file)).try_init(),
                None => registry.with(layer.with_writer(std::io::stderr)).try_init(),
            }
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_span_events(config.span_events())
                .with_target(config.include_targets);

            match file {
                Some(file) => registry
                    .with(layer.with_ansi(false).with_writer(file))
                    .try_init(),
                None => registry.with(layer.with_writer(std::io::stderr)).try_init(),
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_span_events(config.span_events())
                .with_target(config.include_targets);

            match file {
                Some(file) => registry
                    .with(layer.with_ansi(false).with_writer(file))
                    .try_init(),
                None => registry.with(layer.with_writer(std::io::stderr)).try_init(),
            }
        }
    };

    installed.map_err(|e| LingoError::config_with_source("Failed to install tracing subscriber", e))
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(LogFormat::from_name("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name("Compact"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::from_name("PRETTY"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::from_name("xml"), None);
    }

    #[test]
    fn test_missing_log_directory_is_an_error() {
        let config = LoggingConfig {
            file_path: Some(PathBuf::from("/nonexistent-lingo-dir/sub/lingo.log")),
            ..LoggingConfig::default()
        };

        assert!(matches!(config.open_log_file(), Err(LingoError::Io(_))));
    }
}
