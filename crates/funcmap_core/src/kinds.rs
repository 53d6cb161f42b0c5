//! Value kind vocabulary.
//!
//! This registry covers every kind an [`ArgumentValue`](crate::ArgumentValue) can carry, plus the `any`
//! wildcard that parameter signatures use. Callers should use the stable identifier [`Kind`] for identity and
//! query spellings and other metadata through [`KindInfo`] / [`KINDS`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**.
//! - Aliases exist so literals and signatures can use Rust spellings (`"i64"`) as well as the short ones (`"int"`).
//!
//! ## Examples
//! ```rust
//! use funcmap_core::kinds::{self, Kind};
//!
//! assert_eq!(kinds::from_str("int"), Some(Kind::Int64));
//! assert_eq!(kinds::from_str("I64"), Some(Kind::Int64));
//! assert_eq!(kinds::as_str(Kind::Float64), "float");
//! ```

use std::fmt;
use std::str::FromStr;

/// Stable identifier for a value kind.
///
/// `Any` is never the tag of a concrete value; it only appears in parameter signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int64,
    Float64,
    String,
    Sequence,
    Any,
}

impl Kind {
    /// Whether this kind names a single (non-container) value.
    ///
    /// `Any` is not a scalar itself; it matches scalars.
    pub fn is_scalar(self) -> bool {
        matches!(self, Kind::Bool | Kind::Int64 | Kind::Float64 | Kind::String)
    }

    /// Whether this kind may appear as a declared parameter.
    pub fn is_parameter_kind(self) -> bool {
        self.is_scalar() || self == Kind::Any
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Error returned when a spelling does not name any kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Metadata for a value kind.
#[derive(Debug, Clone, Copy)]
pub struct KindInfo {
    pub id: Kind,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of all value kinds.
pub const KINDS: &[KindInfo] = &[
    info(Kind::Bool, "bool", &["boolean"], "Boolean truth value."),
    info(Kind::Int64, "int", &["i64", "int64"], "Signed 64-bit integer."),
    info(Kind::Float64, "float", &["f64", "float64"], "64-bit IEEE-754 floating-point number."),
    info(Kind::String, "str", &["string"], "UTF-8 text."),
    info(
        Kind::Sequence,
        "seq",
        &["sequence", "list"],
        "Ordered list of values; only produced as a multi-result container.",
    ),
    info(Kind::Any, "any", &[], "Parameter wildcard accepting any scalar value."),
];

/// Return the canonical spelling for a kind.
///
/// ## Examples
/// ```rust
/// use funcmap_core::kinds::{self, Kind};
///
/// assert_eq!(kinds::as_str(Kind::String), "str");
/// ```
pub fn as_str(id: Kind) -> &'static str {
    info_for(id).canonical
}

/// Return the accepted aliases for a kind.
pub fn aliases(id: Kind) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Return the full metadata entry for a kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: Kind) -> &'static KindInfo {
    KINDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every Kind has a KINDS entry")
}

/// Resolve a spelling to a [`Kind`].
///
/// ## Returns
/// - `Some(Kind)` if `name` matches a canonical spelling or alias.
/// - `None` otherwise.
///
/// ## Notes
/// - Matching is **case-insensitive ASCII**.
pub fn from_str(name: &str) -> Option<Kind> {
    if let Some(k) = KINDS.iter().find(|k| k.canonical.eq_ignore_ascii_case(name)) {
        return Some(k.id);
    }
    KINDS
        .iter()
        .find(|k| k.aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
        .map(|k| k.id)
}

const fn info(
    id: Kind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> KindInfo {
    KindInfo {
        id,
        canonical,
        aliases,
        description,
    }
}
