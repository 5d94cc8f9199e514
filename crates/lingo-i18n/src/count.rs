//! Pluralization count at the API boundary

use crate::replacements::{ReplacementValue, Replacements};

/// The quantity that drives branch selection.
///
/// Callers normally pass a number. `Legacy` accepts an object-like map for
/// older call sites that passed `{ n: 3 }` instead of `3`; its first value is
/// the count. Both are normalized to a plain `f64` by [`Count::normalize`]
/// before any rule is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Count {
    /// A plain number
    Numeric(f64),
    /// A map whose first value is the count
    Legacy(Replacements),
}

impl Count {
    /// Reduce to the number used for interval matching.
    ///
    /// A legacy map contributes its first value; text is parsed as a number
    /// and anything non-numeric (or an empty map) counts as zero.
    pub fn normalize(&self) -> f64 {
        match self {
            Self::Numeric(value) => *value,
            Self::Legacy(map) => map
                .iter()
                .next()
                .and_then(|(_, value)| match value {
                    ReplacementValue::Number(number) => Some(*number),
                    ReplacementValue::Text(text) => text.trim().parse::<f64>().ok(),
                })
                .filter(|number| !number.is_nan())
                .unwrap_or(0.0),
        }
    }
}

impl From<Replacements> for Count {
    fn from(map: Replacements) -> Self {
        Self::Legacy(map)
    }
}

macro_rules! numeric_count {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Count {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $ty) -> Self {
                    Self::Numeric(value as f64)
                }
            }
        )+
    };
}

numeric_count!(f64, f32, i32, i64, u32, u64, usize);
