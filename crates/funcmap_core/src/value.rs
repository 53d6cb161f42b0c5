//! Type-erased argument and result values.
//!
//! [`ArgumentValue`] is the only currency that crosses the registry boundary: every argument passed to `invoke`
//! and every value a callable produces is one of these.
//!
//! ## Notes
//! - Coercion is exact-match: an `Int64` never becomes a `Float64`, and nothing becomes a `String` implicitly.
//! - `Sequence` only shows up as a multi-result container. It is never accepted as a single argument, not even by
//!   the `any` wildcard.
//!
//! ## Examples
//! ```rust
//! use funcmap_core::{ArgumentValue, Kind};
//!
//! let v = ArgumentValue::from(5_i64);
//! assert_eq!(v.classify(), Kind::Int64);
//! assert!(v.clone().coerce_to(Kind::Float64).is_err());
//! assert_eq!(v.clone().coerce_to(Kind::Int64), Ok(v));
//! ```

use std::fmt;

use crate::errors::CoercionError;
use crate::kinds::Kind;

/// A tagged, dynamically-typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Sequence(Vec<ArgumentValue>),
}

impl ArgumentValue {
    /// Return the active tag.
    pub fn classify(&self) -> Kind {
        match self {
            ArgumentValue::Bool(_) => Kind::Bool,
            ArgumentValue::Int64(_) => Kind::Int64,
            ArgumentValue::Float64(_) => Kind::Float64,
            ArgumentValue::String(_) => Kind::String,
            ArgumentValue::Sequence(_) => Kind::Sequence,
        }
    }

    /// Coerce this value to `expected`.
    ///
    /// ## Returns
    /// - The value unchanged when `expected` is its own tag, or when `expected` is [`Kind::Any`] and the value is a
    ///   scalar.
    /// - `CoercionError { expected, actual }` otherwise.
    ///
    /// ## Notes
    /// - Idempotent: coercing an already-coerced value yields the same value again.
    pub fn coerce_to(self, expected: Kind) -> Result<ArgumentValue, CoercionError> {
        let actual = self.classify();
        let accepted = match expected {
            Kind::Any => actual.is_scalar(),
            _ => expected == actual,
        };
        if accepted {
            Ok(self)
        } else {
            Err(CoercionError::new(expected, actual))
        }
    }

    /// Whether [`coerce_to`](Self::coerce_to) would accept this value for `expected`, without consuming it.
    pub fn matches(&self, expected: Kind) -> bool {
        match expected {
            Kind::Any => self.classify().is_scalar(),
            _ => self.classify() == expected,
        }
    }

    /// Borrow the elements of a `Sequence`.
    pub fn as_sequence(&self) -> Result<&[ArgumentValue], CoercionError> {
        match self {
            ArgumentValue::Sequence(items) => Ok(items),
            other => Err(CoercionError::new(Kind::Sequence, other.classify())),
        }
    }

    /// Borrow this value as a scalar; fails on a `Sequence`.
    pub fn as_scalar(&self) -> Result<&ArgumentValue, CoercionError> {
        match self {
            ArgumentValue::Sequence(_) => Err(CoercionError::new(Kind::Any, Kind::Sequence)),
            scalar => Ok(scalar),
        }
    }

    pub fn as_bool(&self) -> Result<bool, CoercionError> {
        match self {
            ArgumentValue::Bool(b) => Ok(*b),
            other => Err(CoercionError::new(Kind::Bool, other.classify())),
        }
    }

    pub fn as_int64(&self) -> Result<i64, CoercionError> {
        match self {
            ArgumentValue::Int64(n) => Ok(*n),
            other => Err(CoercionError::new(Kind::Int64, other.classify())),
        }
    }

    pub fn as_float64(&self) -> Result<f64, CoercionError> {
        match self {
            ArgumentValue::Float64(x) => Ok(*x),
            other => Err(CoercionError::new(Kind::Float64, other.classify())),
        }
    }

    pub fn as_str(&self) -> Result<&str, CoercionError> {
        match self {
            ArgumentValue::String(s) => Ok(s),
            other => Err(CoercionError::new(Kind::String, other.classify())),
        }
    }

    /// Take the elements out of a `Sequence`.
    pub fn into_sequence(self) -> Result<Vec<ArgumentValue>, CoercionError> {
        match self {
            ArgumentValue::Sequence(items) => Ok(items),
            other => Err(CoercionError::new(Kind::Sequence, other.classify())),
        }
    }
}

impl From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        ArgumentValue::Bool(value)
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        ArgumentValue::Int64(value)
    }
}

impl From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        ArgumentValue::Float64(value)
    }
}

impl From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        ArgumentValue::String(value)
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::String(value.to_string())
    }
}

impl From<Vec<ArgumentValue>> for ArgumentValue {
    fn from(values: Vec<ArgumentValue>) -> Self {
        ArgumentValue::Sequence(values)
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Bool(b) => write!(f, "{b}"),
            ArgumentValue::Int64(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` so floats never print like ints.
            ArgumentValue::Float64(x) => write!(f, "{x:?}"),
            ArgumentValue::String(s) => write!(f, "{s:?}"),
            ArgumentValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn classify_reports_active_tag() {
        assert_eq!(ArgumentValue::Bool(true).classify(), Kind::Bool);
        assert_eq!(ArgumentValue::Int64(1).classify(), Kind::Int64);
        assert_eq!(ArgumentValue::Float64(1.5).classify(), Kind::Float64);
        assert_eq!(ArgumentValue::from("x").classify(), Kind::String);
        assert_eq!(ArgumentValue::Sequence(vec![]).classify(), Kind::Sequence);
    }

    #[test]
    fn coerce_exact_match_returns_value_unchanged() {
        let v = ArgumentValue::from("hello");
        assert_eq!(v.clone().coerce_to(Kind::String), Ok(v));
    }

    #[test]
    fn coerce_never_widens_ints() {
        let err = ArgumentValue::Int64(3).coerce_to(Kind::Float64).unwrap_err();
        assert_eq!(err, CoercionError::new(Kind::Float64, Kind::Int64));
    }

    #[test]
    fn coerce_never_stringifies() {
        let err = ArgumentValue::Bool(false).coerce_to(Kind::String).unwrap_err();
        assert_eq!(err.expected, Kind::String);
        assert_eq!(err.actual, Kind::Bool);
    }

    #[test]
    fn any_accepts_scalars_only() {
        assert!(ArgumentValue::Float64(0.0).coerce_to(Kind::Any).is_ok());
        let err = ArgumentValue::Sequence(vec![ArgumentValue::Int64(1)])
            .coerce_to(Kind::Any)
            .unwrap_err();
        assert_eq!(err, CoercionError::new(Kind::Any, Kind::Sequence));
    }

    #[test]
    fn sequence_does_not_flatten_into_its_element() {
        let single = ArgumentValue::Sequence(vec![ArgumentValue::Int64(7)]);
        assert!(single.coerce_to(Kind::Int64).is_err());
    }

    #[test]
    fn matches_agrees_with_coerce_to() {
        let v = ArgumentValue::Int64(2);
        for kind in [Kind::Bool, Kind::Int64, Kind::Float64, Kind::String, Kind::Sequence, Kind::Any] {
            assert_eq!(v.matches(kind), v.clone().coerce_to(kind).is_ok(), "kind {kind}");
        }
    }

    #[test]
    fn wrong_accessor_is_an_error() {
        let v = ArgumentValue::Int64(2);
        assert_eq!(v.as_sequence(), Err(CoercionError::new(Kind::Sequence, Kind::Int64)));
        assert_eq!(v.as_str(), Err(CoercionError::new(Kind::String, Kind::Int64)));
        assert_eq!(v.as_int64(), Ok(2));

        let seq = ArgumentValue::Sequence(vec![v.clone()]);
        assert!(seq.as_scalar().is_err());
        assert_eq!(seq.as_sequence().map(<[_]>::len), Ok(1));
        assert_eq!(seq.into_sequence(), Ok(vec![v]));
    }

    #[test]
    fn display_formats() {
        assert_eq!(ArgumentValue::Int64(8).to_string(), "8");
        assert_eq!(ArgumentValue::Float64(2.0).to_string(), "2.0");
        assert_eq!(ArgumentValue::from("hi").to_string(), "\"hi\"");
        assert_eq!(
            ArgumentValue::Sequence(vec![ArgumentValue::Int64(2), ArgumentValue::Int64(4)]).to_string(),
            "[2, 4]"
        );
    }
}
