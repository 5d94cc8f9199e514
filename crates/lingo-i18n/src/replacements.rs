//! Named placeholder values and `:name` substitution

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved replacement name that also drives pluralization.
pub const COUNT_KEY: &str = "count";

/// A scalar substituted for a `:name` placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplacementValue {
    /// Numeric value, rendered without a trailing `.0` when integral and
    /// with `Infinity`, `-Infinity` and `NaN` for non-finite values
    Number(f64),
    /// Text value, substituted verbatim
    Text(String),
}

impl ReplacementValue {
    /// The numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for ReplacementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.is_nan() => f.write_str("NaN"),
            Self::Number(value) if value.is_infinite() => {
                f.write_str(if value.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Self::Number(value) if *value == 0.0 => f.write_str("0"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for ReplacementValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ReplacementValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

macro_rules! number_replacement {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ReplacementValue {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

number_replacement!(f64, f32, i32, i64, u32, u64, usize);

/// Placeholder values, applied in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Replacements(IndexMap<String, ReplacementValue>);

impl Replacements {
    /// Create an empty set of replacements
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ReplacementValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a replacement, returning the previous value.
    ///
    /// Overwriting keeps the name's original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ReplacementValue>,
    ) -> Option<ReplacementValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Look up a replacement by name
    pub fn get(&self, name: &str) -> Option<&ReplacementValue> {
        self.0.get(name)
    }

    /// The `count` replacement, when it is numeric
    pub fn count(&self) -> Option<f64> {
        self.get(COUNT_KEY).and_then(ReplacementValue::as_number)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReplacementValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of replacements
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no replacements
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Replacements
where
    K: Into<String>,
    V: Into<ReplacementValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Replace every `:name` in `text` with its value.
///
/// Replacements run one after another over the whole text, so a value that
/// itself contains `:other` is substituted again if `other` comes later.
pub fn apply_replacements(text: &str, replacements: &Replacements) -> String {
    let mut message = text.to_string();

    for (name, value) in replacements.iter() {
        let placeholder = format!(":{name}");
        if message.contains(&placeholder) {
            message = message.replace(&placeholder, &value.to_string());
        }
    }

    message
}

/// Build [`Replacements`] from `name => value` pairs
///
/// ```rust
/// use lingo_i18n::replacements;
///
/// let replacements = replacements!["name" => "Alice", "count" => 3];
/// assert_eq!(replacements.count(), Some(3.0));
/// ```
#[macro_export]
macro_rules! replacements {
    () => {
        $crate::Replacements::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut replacements = $crate::Replacements::new();
        $(
            replacements.insert($name, $value);
        )+
        replacements
    }};
}
