//! Main entry point for the `lingo` command.

use anyhow::Context;
use clap::Parser;
use lingo_cli::{build_lang, execute, Cli};
use lingo_common::init_logging;
use lingo_config::ConfigLoader;
use std::process::ExitCode;
use tracing::error;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let loader = cli
        .config
        .clone()
        .map_or_else(ConfigLoader::defaults, ConfigLoader::new);
    let config = loader.load().context("Failed to load configuration")?;

    let mut logging = config.logging_config()?;
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    init_logging(&logging)?;

    let lang = build_lang(&cli, &config)
        .inspect_err(|e| error!("Failed to initialize the engine: {}", e))?;

    let outcome = execute(&lang, &cli.command)?;
    println!("{}", outcome.output);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
