//! # Lingo Config
//!
//! Configuration for the Lingo engine and command line tool.
//!
//! A config file (TOML or YAML) is read into [`Config`], `LINGO_*`
//! environment variables are layered on top, and the result is validated
//! before it is handed to the engine or the logging setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;

pub use loader::{apply_overrides, ConfigLoader, ENV_PREFIX};
pub use schema::{CatalogConfig, Config, EngineConfig, LogConfig};
