//! Error types for message resolution

use thiserror::Error;

/// Errors that can occur while building a [`Lang`](crate::Lang) or loading catalogs
#[derive(Error, Debug)]
pub enum LangError {
    /// Neither an explicit catalog nor a fallback catalog was supplied
    #[error("No message catalog available: provide messages explicitly or register a fallback catalog")]
    MissingCatalog,

    /// Failed to read a catalog file
    #[error("Failed to load catalog file: {path}")]
    CatalogLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file was read but could not be parsed
    #[error("Failed to parse catalog file {path}: {message}")]
    CatalogParse { path: String, message: String },

    /// The file extension does not map to a known catalog format
    #[error("Unsupported catalog format: {path}")]
    UnsupportedFormat { path: String },

    /// The document parsed, but its shape is not group -> entry -> template
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Result type for catalog and engine construction
pub type LangResult<T> = Result<T, LangError>;

/// Reasons an interval spec cannot be evaluated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The delimiters match none of the set or range shapes
    #[error("interval '{0}' matches none of the known shapes")]
    UnknownShape(String),

    /// A bound is neither a number nor an infinity marker
    #[error("bound '{token}' in interval '{spec}' is not a number")]
    InvalidBound { spec: String, token: String },

    /// A range did not have exactly two bounds
    #[error("range '{spec}' needs exactly two bounds, found {found}")]
    BoundCount { spec: String, found: usize },
}

/// Problems found in a pluralizable template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template produced no branches at all (empty, or only separators)
    #[error("template has no branches")]
    NoBranches,

    /// A branch without a rule precedes a branch with one
    #[error("branch {index} has no explicit rule but is followed by a branch that has one")]
    UnguardedBeforeGuarded { index: usize },

    /// A branch rule could not be parsed into numbers
    #[error("branch {index} has an invalid explicit rule: {source}")]
    InvalidRule {
        index: usize,
        #[source]
        source: IntervalError,
    },

    /// A branch rule fits no interval shape, so it never matches.
    ///
    /// Reported only: the template still resolves.
    #[error("branch {index} rule '{rule}' matches none of the interval shapes and never applies")]
    UnknownShape { index: usize, rule: String },
}

impl TemplateError {
    /// Whether this failure is a malformed rule worth reporting, as opposed to
    /// a template that simply has nothing to select from
    pub fn is_invalid_rule(&self) -> bool {
        !matches!(self, Self::NoBranches)
    }

    /// Whether the template resolves to its raw text because of this error
    pub fn falls_back_to_raw(&self) -> bool {
        !matches!(self, Self::UnknownShape { .. })
    }
}
