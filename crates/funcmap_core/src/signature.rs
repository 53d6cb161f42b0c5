//! Parameter signatures.
//!
//! A [`ParameterSignature`] is the ordered list of kinds a callable expects. It is captured once, when the
//! callable is registered, and never changes afterwards: there is no mutating API.

use std::fmt;
use std::ops::Index;

use crate::errors::SignatureError;
use crate::kinds::Kind;

/// Ordered parameter kinds, one entry per declared parameter.
///
/// ## Notes
/// - Entries are scalar kinds or [`Kind::Any`]. `Kind::Sequence` is rejected at construction.
///
/// ## Examples
/// ```rust
/// use funcmap_core::{Kind, ParameterSignature};
///
/// let sig = ParameterSignature::new([Kind::Int64, Kind::Int64]).unwrap();
/// assert_eq!(sig.len(), 2);
/// assert_eq!(sig.to_string(), "(int, int)");
/// assert!(ParameterSignature::new([Kind::Sequence]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterSignature {
    kinds: Box<[Kind]>,
}

impl ParameterSignature {
    /// Build a signature from parameter kinds in declaration order.
    ///
    /// ## Errors
    /// - [`SignatureError::UnsupportedParameter`] for the first entry that is not a parameter kind.
    pub fn new(kinds: impl IntoIterator<Item = Kind>) -> Result<Self, SignatureError> {
        let kinds: Box<[Kind]> = kinds.into_iter().collect();
        if let Some((position, &kind)) = kinds.iter().enumerate().find(|(_, k)| !k.is_parameter_kind()) {
            return Err(SignatureError::UnsupportedParameter { position, kind });
        }
        Ok(Self { kinds })
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<Kind> {
        self.kinds.get(position).copied()
    }

    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }

    pub fn iter(&self) -> impl Iterator<Item = Kind> + '_ {
        self.kinds.iter().copied()
    }
}

impl Index<usize> for ParameterSignature {
    type Output = Kind;

    fn index(&self, position: usize) -> &Kind {
        &self.kinds[position]
    }
}

impl fmt::Display for ParameterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, kind) in self.kinds.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}")?;
        }
        f.write_str(")")
    }
}
