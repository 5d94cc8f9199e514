//! Loading catalogs from JSON, YAML, and TOML files

use crate::catalog::Catalog;
use crate::error::{LangError, LangResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Catalog document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl CatalogFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse a document into an untyped value
    fn parse(self, contents: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

/// Loads a catalog from a file whose format follows its extension
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    /// Create a loader for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog
    pub fn load(&self) -> LangResult<Catalog> {
        let display = self.path.to_string_lossy().to_string();
        let format = CatalogFormat::from_path(&self.path).ok_or_else(|| {
            LangError::UnsupportedFormat {
                path: display.clone(),
            }
        })?;

        debug!("Loading {:?} catalog from {:?}", format, self.path);

        let contents = fs::read_to_string(&self.path).map_err(|source| LangError::CatalogLoad {
            path: display.clone(),
            source,
        })?;

        let catalog = parse_catalog(&contents, format).map_err(|err| match err {
            LangError::CatalogParse { message, .. } => {
                error!("Failed to parse catalog {:?}: {}", self.path, message);
                LangError::CatalogParse {
                    path: display.clone(),
                    message,
                }
            }
            other => other,
        })?;

        info!("Loaded catalog from {:?} ({} group(s))", self.path, catalog.len());
        Ok(catalog)
    }
}

/// Parse catalog text in the given format.
///
/// Non-string entries are skipped rather than rejected.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> LangResult<Catalog> {
    let value = format.parse(contents).map_err(|message| LangError::CatalogParse {
        path: "<inline>".to_string(),
        message,
    })?;
    Catalog::from_value(value)
}
