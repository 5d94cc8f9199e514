//! Engine construction and command execution.

use crate::cli::{Cli, Command, ResolveArgs};
use crate::error::CliResult;
use lingo_config::Config;
use lingo_i18n::{Catalog, CatalogLoader, Count, Lang, ReplacementValue, Replacements};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text printed to stdout
    pub output: String,
    /// Whether the process exits with status 0
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

/// Build the engine from command line flags, falling back to `config`.
///
/// The fallback catalog is only read when no primary catalog is configured.
/// A `--group` override is validated like the configured group.
pub fn build_lang(cli: &Cli, config: &Config) -> CliResult<Lang> {
    let options = match &cli.group {
        Some(group) => {
            let mut config = config.clone();
            config.engine.default_group.clone_from(group);
            config.validate()?;
            config.lang_options()
        }
        None => config.lang_options(),
    };

    let primary = cli.catalog.as_ref().or(config.catalog.path.as_ref());
    let messages = load(primary)?;
    let fallback = match messages {
        Some(_) => None,
        None => load(cli.fallback.as_ref().or(config.catalog.fallback.as_ref()))?,
    };

    Ok(Lang::builder()
        .messages(messages)
        .fallback(fallback)
        .options(options)
        .build()?)
}

fn load(path: Option<&PathBuf>) -> CliResult<Option<Catalog>> {
    Ok(path
        .map(|path| CatalogLoader::new(path).load())
        .transpose()?)
}

/// Run `command` against `lang`
pub fn execute(lang: &Lang, command: &Command) -> CliResult<Outcome> {
    let outcome = match command {
        Command::Get { args, count } => {
            let replacements = replacements(args);
            Outcome::ok(lang.get(&args.key, replacements.as_ref(), count.map(Count::from)))
        }
        Command::Choice { args, count } => {
            let replacements = replacements(args);
            Outcome::ok(lang.choice(&args.key, *count, replacements.as_ref()))
        }
        Command::Has { key } => {
            let found = lang.has(key);
            Outcome {
                output: found.to_string(),
                success: found,
            }
        }
        Command::Check => {
            let diagnostics = lang.validate();
            info!("Checked catalog, {} malformed template(s)", diagnostics.len());

            if diagnostics.is_empty() {
                Outcome::ok("No malformed templates")
            } else {
                Outcome {
                    output: diagnostics
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n"),
                    success: false,
                }
            }
        }
    };

    debug!("Command finished, success: {}", outcome.success);
    Ok(outcome)
}

/// `None` when no `--replace` was given, so placeholders stay untouched.
fn replacements(args: &ResolveArgs) -> Option<Replacements> {
    if args.replacements.is_empty() {
        return None;
    }

    Some(
        args.replacements
            .iter()
            .map(|(name, value)| (name.clone(), replacement_value(value)))
            .collect(),
    )
}

/// Numbers stay numeric only when they print back unchanged (`3`, `2.5`),
/// so values like `007` keep their spelling.
fn replacement_value(value: &str) -> ReplacementValue {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() && number.to_string() == value => {
            ReplacementValue::Number(number)
        }
        _ => ReplacementValue::Text(value.to_string()),
    }
}
