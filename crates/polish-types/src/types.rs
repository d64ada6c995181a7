use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a binary operation.
///
/// Integer operators produce `Integer`; true division always produces `Float`,
/// even when the quotient is whole.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
}

impl Number {
    /// Numeric value as `f64`, regardless of variant.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    /// The integer value, if this is an `Integer`.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(_) => None,
        }
    }

    /// Whether this value is the `Integer` variant.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

// Numbers compare by value, so `Integer(2) == Float(2.0)`.
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                *a as f64 == *b
            }
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::Integer(*other)
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == Self::Integer(i64::from(*other))
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Float(*other)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<Number> for serde_json::Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(i) => Self::Number(serde_json::Number::from(i)),
            Number::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
        }
    }
}

// Whole floats keep a trailing `.0` at any magnitude.
#[allow(clippy::float_cmp)]
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) if fl.is_finite() && fl.fract() == 0.0 => write!(f, "{fl:.1}"),
            Self::Float(fl) => write!(f, "{fl}"),
        }
    }
}
