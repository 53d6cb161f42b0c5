//! Registration and invocation errors.
//!
//! Every failure of `register`/`invoke` is returned to the immediate caller as one of these values. Nothing here is
//! logged or swallowed by the registry.
//!
//! ## Notes
//! - [`InvocationError::Callable`] is the only variant produced *after* the callable ran; it carries the
//!   callable's own payload untouched. Everything else means the dispatch itself was wrong.
//! - Both enums derive [`miette::Diagnostic`] so front-ends can render them with codes and help text.

use std::error::Error as StdError;

use funcmap_core::{CoercionError, SignatureError};
use miette::Diagnostic;
use thiserror::Error;

/// Failure payload produced by a registered callable.
pub type CallableFailure = Box<dyn StdError + Send + Sync + 'static>;

/// Why a callable's shape cannot be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnsupportedReason {
    #[error("callables must return at least one value")]
    NoReturnValues,

    #[error(transparent)]
    Parameter(#[from] SignatureError),
}

/// Errors returned by `register` / `register_raw`.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistrationError {
    #[error("a callable named `{name}` is already registered")]
    #[diagnostic(
        code(funcmap::duplicate_name),
        help("unregister the existing callable first to replace its behavior")
    )]
    DuplicateName { name: String },

    #[error("callable `{name}` has an unsupported signature: {reason}")]
    #[diagnostic(code(funcmap::unsupported_signature))]
    UnsupportedSignature { name: String, reason: UnsupportedReason },

    #[error("`{name}` is not a valid callable name")]
    #[diagnostic(
        code(funcmap::invalid_name),
        help("names must be non-empty and contain no whitespace or control characters")
    )]
    InvalidName { name: String },
}

impl RegistrationError {
    /// The name the failed registration was attempted under.
    pub fn name(&self) -> &str {
        match self {
            RegistrationError::DuplicateName { name }
            | RegistrationError::UnsupportedSignature { name, .. }
            | RegistrationError::InvalidName { name } => name,
        }
    }
}

/// Errors returned by `invoke`.
#[derive(Debug, Error, Diagnostic)]
pub enum InvocationError {
    #[error("no callable named `{name}` is registered")]
    #[diagnostic(code(funcmap::name_not_found))]
    NameNotFound { name: String },

    #[error("`{name}` takes {expected} argument(s) but {actual} were supplied")]
    #[diagnostic(code(funcmap::arity_mismatch))]
    ArityMismatch { name: String, expected: usize, actual: usize },

    #[error("argument {position} of `{name}`: {source}")]
    #[diagnostic(
        code(funcmap::coercion),
        help("arguments must already have the declared kind; no implicit conversion is performed")
    )]
    Coercion {
        name: String,
        position: usize,
        #[source]
        source: CoercionError,
    },

    #[error("`{name}` failed: {source}")]
    #[diagnostic(code(funcmap::callable_failed))]
    Callable {
        name: String,
        #[source]
        source: CallableFailure,
    },
}

impl InvocationError {
    /// The name that was being invoked.
    pub fn name(&self) -> &str {
        match self {
            InvocationError::NameNotFound { name }
            | InvocationError::ArityMismatch { name, .. }
            | InvocationError::Coercion { name, .. }
            | InvocationError::Callable { name, .. } => name,
        }
    }

    /// Whether the dispatch was wrong (the callable never ran).
    pub fn is_dispatch_error(&self) -> bool {
        !self.is_callable_error()
    }

    /// Whether the callable ran and reported its own failure.
    pub fn is_callable_error(&self) -> bool {
        matches!(self, InvocationError::Callable { .. })
    }

    /// Borrow the callable's own failure payload, if this is a [`InvocationError::Callable`].
    pub fn callable_failure(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            InvocationError::Callable { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }

    /// Take the callable's own failure payload, if this is a [`InvocationError::Callable`].
    pub fn into_callable_failure(self) -> Option<CallableFailure> {
        match self {
            InvocationError::Callable { source, .. } => Some(source),
            _ => None,
        }
    }
}
