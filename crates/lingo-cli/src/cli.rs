//! Command line definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve message keys from a catalog.
#[derive(Debug, Parser)]
#[command(name = "lingo", version)]
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Command,

    /// Catalog file (.json, .yaml, .yml or .toml)
    #[arg(long, short, global = true)]
    pub catalog: Option<PathBuf>,

    /// Catalog used when no primary catalog is configured
    #[arg(long, global = true)]
    pub fallback: Option<PathBuf>,

    /// Config file (.toml, .yaml or .yml)
    #[arg(long, global = true, env = "LINGO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Group for keys without a known group prefix
    #[arg(long, short, global = true)]
    pub group: Option<String>,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands of `lingo`
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a key
    Get {
        #[command(flatten)]
        args: ResolveArgs,

        /// Explicit count for plural selection
        #[arg(long, allow_negative_numbers = true)]
        count: Option<f64>,
    },

    /// Resolve a key for a count, exposed as `:count`
    Choice {
        #[command(flatten)]
        args: ResolveArgs,

        /// Count used to pick the plural form
        #[arg(allow_negative_numbers = true)]
        count: f64,
    },

    /// Exit successfully only if the key resolves to a template
    Has {
        /// Lookup key, e.g. `errors.missing`
        key: String,
    },

    /// Report templates whose plural rules are malformed
    Check,
}

/// Key and placeholder values shared by `get` and `choice`
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Lookup key, e.g. `errors.missing`
    pub key: String,

    /// Placeholder value as NAME=VALUE (repeatable)
    ///
    /// Example: `--replace name=Ada --replace count=3`
    #[arg(long = "replace", short = 'r', value_parser = parse_replacement)]
    pub replacements: Vec<(String, String)>,
}

fn parse_replacement(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}
