//! Interval specs guarding pluralization branches
//!
//! An interval is either a finite set of numbers or a range whose ends are
//! each inclusive or exclusive:
//!
//! | Spec       | Meaning                  |
//! |------------|--------------------------|
//! | `{0,3,5}`  | count is 0, 3 or 5       |
//! | `[1,5]`    | 1 <= count <= 5          |
//! | `]1,5[`    | 1 < count < 5            |
//! | `(1,5)`    | 1 < count < 5            |
//! | `[1,5)`    | 1 <= count < 5           |
//! | `(1,5]`    | 1 < count <= 5           |
//! | `[6,*]`    | count >= 6               |
//!
//! `*`, `Inf` and `+Inf` are positive infinity, `-Inf` and `-*` negative
//! infinity (case-insensitive).

use crate::error::IntervalError;

/// Characters removed from a spec before its bounds are split out.
const DELIMITERS: &[char] = &['[', ']', '{', '}', '(', ')'];

/// Opening delimiters of an exclusive lower bound.
const EXCLUSIVE_OPEN: &[char] = &['(', ']', ')'];

/// Closing delimiters of an exclusive upper bound.
const EXCLUSIVE_CLOSE: &[char] = &[')', '[', '('];

/// A parsed interval spec
#[derive(Debug, Clone, PartialEq)]
pub enum Interval {
    /// Exact membership in a finite set
    Set(Vec<f64>),
    /// A range with independently inclusive ends; bounds may be infinite
    Range {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
        /// Whether `lower` itself matches
        lower_inclusive: bool,
        /// Whether `upper` itself matches
        upper_inclusive: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Set,
    BothInclusive,
    BothExclusive,
    RightInclusive,
    LeftInclusive,
}

impl Shape {
    /// Classify by outer delimiters, checking the shapes in a fixed order.
    fn of(spec: &str) -> Option<Self> {
        if spec.chars().count() < 2 {
            return None;
        }
        let first = spec.chars().next()?;
        let last = spec.chars().next_back()?;

        if first == '{' && last == '}' {
            Some(Self::Set)
        } else if first == '[' && last == ']' {
            Some(Self::BothInclusive)
        } else if EXCLUSIVE_OPEN.contains(&first) && EXCLUSIVE_CLOSE.contains(&last) {
            Some(Self::BothExclusive)
        } else if EXCLUSIVE_OPEN.contains(&first) && last == ']' {
            Some(Self::RightInclusive)
        } else if first == '[' && EXCLUSIVE_CLOSE.contains(&last) {
            Some(Self::LeftInclusive)
        } else {
            None
        }
    }
}

impl Interval {
    /// Parse an interval spec such as `{1}`, `[2,4]` or `]-Inf,0[`
    pub fn parse(spec: &str) -> Result<Self, IntervalError> {
        let spec = spec.trim();
        let shape = Shape::of(spec).ok_or_else(|| IntervalError::UnknownShape(spec.to_string()))?;

        let bounds = spec
            .replace(DELIMITERS, "")
            .split(',')
            .map(|token| {
                parse_bound(token).ok_or_else(|| IntervalError::InvalidBound {
                    spec: spec.to_string(),
                    token: token.trim().to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let (lower_inclusive, upper_inclusive) = match shape {
            Shape::Set => return Ok(Self::Set(bounds)),
            Shape::BothInclusive => (true, true),
            Shape::BothExclusive => (false, false),
            Shape::RightInclusive => (false, true),
            Shape::LeftInclusive => (true, false),
        };

        match bounds.as_slice() {
            &[lower, upper] => Ok(Self::Range {
                lower,
                upper,
                lower_inclusive,
                upper_inclusive,
            }),
            _ => Err(IntervalError::BoundCount {
                spec: spec.to_string(),
                found: bounds.len(),
            }),
        }
    }

    /// Whether `count` belongs to this interval
    pub fn contains(&self, count: f64) -> bool {
        match self {
            Self::Set(members) => members.iter().any(|&member| member == count),
            Self::Range {
                lower,
                upper,
                lower_inclusive,
                upper_inclusive,
            } => {
                let above = if *lower_inclusive { count >= *lower } else { count > *lower };
                let below = if *upper_inclusive { count <= *upper } else { count < *upper };
                above && below
            }
        }
    }
}

/// Test whether `count` falls within `spec`.
///
/// A spec that cannot be parsed never matches.
pub fn test_interval(count: f64, spec: &str) -> bool {
    Interval::parse(spec).is_ok_and(|interval| interval.contains(count))
}

/// Parse one bound, mapping the infinity markers.
fn parse_bound(token: &str) -> Option<f64> {
    let token = token.trim();
    let lowered = token.to_ascii_lowercase();

    if let Some(sign) = lowered.strip_suffix('*').or_else(|| lowered.strip_suffix("inf")) {
        return match sign {
            "" | "+" => Some(f64::INFINITY),
            "-" => Some(f64::NEG_INFINITY),
            _ => None,
        };
    }

    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
