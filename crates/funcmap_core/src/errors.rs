//! Error types shared by the value core.
//!
//! These are plain data errors: they carry the kinds involved and nothing else, so the registry layer can wrap them
//! with the callable name and argument position.

use thiserror::Error;

use crate::kinds::Kind;

/// A value could not be coerced to the kind a caller asked for.
///
/// Coercion is exact-match only, so this is also what the strict accessors (`as_int64`, `as_sequence`, ...)
/// return when called on the wrong tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {actual}")]
pub struct CoercionError {
    pub expected: Kind,
    pub actual: Kind,
}

impl CoercionError {
    pub fn new(expected: Kind, actual: Kind) -> Self {
        Self { expected, actual }
    }
}

/// A parameter kind list could not be turned into a [`ParameterSignature`](crate::ParameterSignature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("parameter {position} is declared as `{kind}`, which is not a parameter kind")]
    UnsupportedParameter { position: usize, kind: Kind },
}

/// A command-line literal could not be parsed into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("`{text}` is not a valid {kind} literal")]
    Malformed { kind: Kind, text: String },

    #[error("`{0}` literals cannot be passed as arguments")]
    NotAnArgument(Kind),

    #[error("unterminated string literal")]
    UnterminatedString,
}
