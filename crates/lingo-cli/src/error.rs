//! Application-wide error types using thiserror.

use lingo_common::LingoError;
use lingo_i18n::LangError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] LingoError),

    /// Catalog loading or engine construction error.
    #[error(transparent)]
    Lang(#[from] LangError),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
