//! Literal parsing for argument values.
//!
//! Adapters that receive arguments as text (the `funcmap call` command, tests, fuzzing) use [`parse_literal`] to
//! build already-classified [`ArgumentValue`]s before invoking anything.
//!
//! ## Rules
//! - `kind:text` forces a kind when `kind` is a known spelling (`int:5`, `str:5`, `float:2`).
//! - Otherwise the kind is inferred: `true`/`false`, then integers, then floats (the text must contain a digit, so
//!   `nan` stays a string), then `"double-quoted"` strings, then any other text as a bare string.
//! - Sequence literals (`[...]` or `seq:`) are rejected: sequences are never arguments.
//!
//! ## Examples
//! ```rust
//! use funcmap_core::ArgumentValue;
//! use funcmap_core::literal::parse_literal;
//!
//! assert_eq!(parse_literal("5"), Ok(ArgumentValue::Int64(5)));
//! assert_eq!(parse_literal("str:5"), Ok(ArgumentValue::from("5")));
//! assert_eq!(parse_literal("\"a b\""), Ok(ArgumentValue::from("a b")));
//! ```

use crate::errors::LiteralError;
use crate::kinds::{self, Kind};
use crate::value::ArgumentValue;

/// Parse a single literal into an [`ArgumentValue`].
pub fn parse_literal(text: &str) -> Result<ArgumentValue, LiteralError> {
    if let Some((prefix, rest)) = text.split_once(':') {
        if let Some(kind) = kinds::from_str(prefix) {
            return parse_as(kind, rest);
        }
    }
    infer(text)
}

/// Parse every literal in order, stopping at the first failure.
pub fn parse_literals<'a>(texts: impl IntoIterator<Item = &'a str>) -> Result<Vec<ArgumentValue>, LiteralError> {
    texts.into_iter().map(parse_literal).collect()
}

fn parse_as(kind: Kind, text: &str) -> Result<ArgumentValue, LiteralError> {
    let malformed = || LiteralError::Malformed {
        kind,
        text: text.to_string(),
    };
    match kind {
        Kind::Bool => parse_bool(text).map(ArgumentValue::Bool).ok_or_else(malformed),
        Kind::Int64 => text.parse::<i64>().map(ArgumentValue::Int64).map_err(|_| malformed()),
        Kind::Float64 => text.parse::<f64>().map(ArgumentValue::Float64).map_err(|_| malformed()),
        Kind::String => {
            if text.starts_with('"') {
                unquote(text).map(ArgumentValue::from)
            } else {
                Ok(ArgumentValue::from(text))
            }
        }
        Kind::Sequence => Err(LiteralError::NotAnArgument(Kind::Sequence)),
        Kind::Any => infer(text),
    }
}

fn infer(text: &str) -> Result<ArgumentValue, LiteralError> {
    if let Some(b) = parse_bool(text) {
        return Ok(ArgumentValue::Bool(b));
    }
    if let Ok(n) = text.parse::<i64>() {
        return Ok(ArgumentValue::Int64(n));
    }
    if text.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(x) = text.parse::<f64>() {
            return Ok(ArgumentValue::Float64(x));
        }
    }
    if text.starts_with('"') {
        return unquote(text).map(ArgumentValue::from);
    }
    if text.starts_with('[') {
        return Err(LiteralError::NotAnArgument(Kind::Sequence));
    }
    Ok(ArgumentValue::from(text))
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn unquote(text: &str) -> Result<&str, LiteralError> {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .ok_or(LiteralError::UnterminatedString)
}
