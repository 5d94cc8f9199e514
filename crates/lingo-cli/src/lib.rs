//! # Lingo CLI
//!
//! Command line front end for the Lingo engine: resolve keys, pick plural
//! forms and check catalogs for malformed rules.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::{build_lang, execute, Outcome};
pub use cli::{Cli, Command, ResolveArgs};
pub use error::{CliError, CliResult};
