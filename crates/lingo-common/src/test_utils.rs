//! Test utilities and shared fixtures for Lingo crates.
//!
//! Enabled with the `testing` feature so that integration tests in other
//! crates of the workspace can reuse the same catalogs and logging setup.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test harness may already own the global subscriber
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `name` inside `dir` and return the full path.
#[cfg(feature = "tempfile")]
pub fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Catalog documents shared by the engine, config and CLI tests.
pub mod catalog_fixtures {
    /// The reference catalog as a JSON document.
    pub fn messages_json() -> &'static str {
        r#"{
  "messages": {
    "hi": "Hello!",
    "greeting": "Hi :name",
    "test-with-replacements": "Hello :partial",
    "test-with-replacements-2": "Hello ( :partial )",
    "test-with-pluralization": "{0}No apple|{1}one apple|[2,4]two to four apples|{5} five apples|[6,*]more than six apples",
    "test-with-count": "{0}:countth|{1}:countst|{2}:countnd|{3}:countrd|[4,*]:countth",
    "test-with-pluralization-and-replacement": "{1}One apple - :value|[2,*] More than one, - :value",
    "apples": "apple|apples"
  },
  "errors": {
    "missing": "Not found",
    "broken": "apple|{2}apples"
  }
}"#
    }

    /// A small catalog as a YAML document.
    pub fn messages_yaml() -> &'static str {
        concat!(
            "messages:\n",
            "  hi: \"Hello!\"\n",
            "  items: \"{0}No items|{1}One item|[2,*]:count items\"\n",
            "errors:\n",
            "  missing: \"Not found\"\n",
        )
    }

    /// A small catalog as a TOML document.
    pub fn messages_toml() -> &'static str {
        concat!(
            "[messages]\n",
            "hi = \"Hello!\"\n",
            "items = \"{0}No items|{1}One item|[2,*]:count items\"\n",
            "\n",
            "[errors]\n",
            "missing = \"Not found\"\n",
        )
    }
}
