//! The uniform call path.
//!
//! Every invocation goes through the same steps, in order:
//! 1. resolve the name,
//! 2. check the argument count against the signature,
//! 3. coerce each argument to its declared kind (the first failure aborts),
//! 4. call the callable exactly once,
//! 5. check that it produced exactly `return_arity` values, each of its declared kind (`any` means a scalar),
//! 6. normalize them into [`InvocationResult::Single`] or [`InvocationResult::Multiple`].
//!
//! Steps 2 and 3 run before the callable is entered, so a rejected invocation never has side effects.

use std::fmt;

use funcmap_core::ArgumentValue;

use crate::descriptor::CallableDescriptor;
use crate::errors::InvocationError;
use crate::registry::Registry;

/// The normalized result of a successful invocation.
///
/// The shape depends only on the callable's return arity, never on how it was registered.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    /// The callable returns exactly one value.
    Single(ArgumentValue),
    /// The callable returns two or more values, in declaration order.
    Multiple(Vec<ArgumentValue>),
}

impl InvocationResult {
    pub fn arity(&self) -> usize {
        match self {
            InvocationResult::Single(_) => 1,
            InvocationResult::Multiple(values) => values.len(),
        }
    }

    /// All values, in declaration order.
    pub fn values(&self) -> &[ArgumentValue] {
        match self {
            InvocationResult::Single(value) => std::slice::from_ref(value),
            InvocationResult::Multiple(values) => values,
        }
    }

    pub fn into_values(self) -> Vec<ArgumentValue> {
        match self {
            InvocationResult::Single(value) => vec![value],
            InvocationResult::Multiple(values) => values,
        }
    }

    pub fn into_single(self) -> Option<ArgumentValue> {
        match self {
            InvocationResult::Single(value) => Some(value),
            InvocationResult::Multiple(_) => None,
        }
    }

    /// Collapse into one value; multiple results become a `Sequence`.
    pub fn into_argument(self) -> ArgumentValue {
        match self {
            InvocationResult::Single(value) => value,
            InvocationResult::Multiple(values) => ArgumentValue::Sequence(values),
        }
    }

    fn from_values(values: Vec<ArgumentValue>) -> Self {
        match <[ArgumentValue; 1]>::try_from(values) {
            Ok([value]) => InvocationResult::Single(value),
            Err(values) => InvocationResult::Multiple(values),
        }
    }
}

impl fmt::Display for InvocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationResult::Single(value) => write!(f, "{value}"),
            InvocationResult::Multiple(values) => {
                f.write_str("(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Drives invocations against a borrowed [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct Invoker<'r> {
    registry: &'r Registry,
}

impl<'r> Invoker<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Invoke `name` with `args`.
    ///
    /// ## Errors
    /// - [`InvocationError::NameNotFound`] if nothing is registered under `name`.
    /// - [`InvocationError::ArityMismatch`] if `args.len()` differs from the signature length.
    /// - [`InvocationError::Coercion`] for the first argument whose kind does not match.
    /// - [`InvocationError::Callable`] if the callable ran and reported a failure.
    ///
    /// ## Panics
    /// - If the callable produces a different number of values than its recorded return arity, or a value whose
    ///   kind differs from the recorded return kind (a `Sequence` never matches `any`). Either means the shape
    ///   recorded at registration was wrong, and no result shape can be trusted.
    #[tracing::instrument(skip_all, fields(name = %name, argc = args.len()))]
    pub fn invoke(&self, name: &str, args: Vec<ArgumentValue>) -> Result<InvocationResult, InvocationError> {
        let descriptor = self
            .registry
            .lookup(name)
            .ok_or_else(|| InvocationError::NameNotFound { name: name.to_string() })?;
        invoke_descriptor(descriptor, args)
    }
}

/// Steps 2–6 of the call path, for a descriptor that has already been resolved.
pub(crate) fn invoke_descriptor(
    descriptor: &CallableDescriptor,
    args: Vec<ArgumentValue>,
) -> Result<InvocationResult, InvocationError> {
    let signature = descriptor.signature();
    if args.len() != signature.len() {
        return Err(InvocationError::ArityMismatch {
            name: descriptor.name().to_string(),
            expected: signature.len(),
            actual: args.len(),
        });
    }

    let args = args
        .into_iter()
        .zip(signature.iter())
        .enumerate()
        .map(|(position, (arg, kind))| {
            arg.coerce_to(kind).map_err(|source| InvocationError::Coercion {
                name: descriptor.name().to_string(),
                position,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let values = descriptor.call(args).map_err(|source| InvocationError::Callable {
        name: descriptor.name().to_string(),
        source,
    })?;

    if values.len() != descriptor.return_arity() {
        panic!(
            "INVARIANT: `{}` is registered with return arity {} but produced {} value(s)",
            descriptor.name(),
            descriptor.return_arity(),
            values.len()
        );
    }
    for (position, (value, kind)) in values.iter().zip(descriptor.return_kinds()).enumerate() {
        if !value.matches(*kind) {
            panic!(
                "INVARIANT: `{}` declares result {} as `{}` but produced a `{}`",
                descriptor.name(),
                position,
                kind,
                value.classify()
            );
        }
    }

    tracing::trace!(return_arity = values.len(), "invocation completed");
    Ok(InvocationResult::from_values(values))
}
