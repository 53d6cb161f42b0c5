//! Callable descriptors: a name bound to a signature, a return shape, and one invoke capability.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use funcmap_core::{ArgumentValue, Kind, ParameterSignature};

use crate::callable::IntoCallable;
use crate::errors::{CallableFailure, RegistrationError, UnsupportedReason};

type InvokeFn = Box<dyn Fn(Vec<ArgumentValue>) -> Result<Vec<ArgumentValue>, CallableFailure> + Send + Sync>;

/// A registered callable.
///
/// Descriptors are built once at registration, owned by the [`Registry`](crate::Registry), and immutable
/// afterwards. Callers only ever borrow them; the invoke capability itself is private to the crate, so the only
/// way to run a callable is through the invoker's validation path.
pub struct CallableDescriptor {
    name: String,
    signature: ParameterSignature,
    return_kinds: Box<[Kind]>,
    invoke: InvokeFn,
    native: Option<Arc<dyn Any + Send + Sync>>,
}

impl CallableDescriptor {
    /// Introspect a typed callable and bind it under `name`.
    pub(crate) fn from_callable<F, Args>(name: String, callable: F) -> Result<Self, RegistrationError>
    where
        F: IntoCallable<Args>,
        Args: 'static,
    {
        let signature = build_signature(&name, F::parameter_kinds())?;
        let return_kinds = build_return_kinds(&name, F::return_kinds())?;

        let callable = Arc::new(callable);
        let handle = Arc::clone(&callable);
        let native: Arc<dyn Any + Send + Sync> = callable;
        Ok(Self {
            name,
            signature,
            return_kinds,
            invoke: Box::new(move |args| handle.invoke_values(args)),
            native: Some(native),
        })
    }

    /// Bind a callable whose shape is declared explicitly rather than read off its type.
    ///
    /// Return kinds of raw callables are unknown, so each is recorded as [`Kind::Any`].
    pub(crate) fn from_raw<G>(
        name: String,
        parameter_kinds: Vec<Kind>,
        return_arity: usize,
        callable: G,
    ) -> Result<Self, RegistrationError>
    where
        G: Fn(Vec<ArgumentValue>) -> Result<Vec<ArgumentValue>, CallableFailure> + Send + Sync + 'static,
    {
        let signature = build_signature(&name, parameter_kinds)?;
        let return_kinds = build_return_kinds(&name, vec![Kind::Any; return_arity])?;
        Ok(Self {
            name,
            signature,
            return_kinds,
            invoke: Box::new(callable),
            native: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &ParameterSignature {
        &self.signature
    }

    /// Number of values every successful call produces. Always at least 1.
    pub fn return_arity(&self) -> usize {
        self.return_kinds.len()
    }

    pub fn return_kinds(&self) -> &[Kind] {
        &self.return_kinds
    }

    /// Recover the originally registered native callable by naming its exact type.
    ///
    /// Returns `None` for raw registrations and when `T` is not the registered type. This is a typed escape hatch
    /// for call sites that know what they registered; it does not go through argument validation.
    ///
    /// ## Examples
    /// ```rust
    /// use funcmap::Registry;
    ///
    /// fn add(a: i64, b: i64) -> i64 {
    ///     a + b
    /// }
    ///
    /// let mut registry = Registry::new();
    /// registry.register("add", add as fn(i64, i64) -> i64).unwrap();
    ///
    /// let descriptor = registry.lookup("add").unwrap();
    /// let native = descriptor.downcast_native::<fn(i64, i64) -> i64>().unwrap();
    /// assert_eq!(native(5, 3), 8);
    /// assert!(descriptor.downcast_native::<fn(i64) -> i64>().is_none());
    /// ```
    pub fn downcast_native<T: Any>(&self) -> Option<&T> {
        self.native.as_deref()?.downcast_ref::<T>()
    }

    /// Snapshot of the descriptor's metadata, without the invoke capability.
    pub fn info(&self) -> CallableInfo {
        CallableInfo {
            name: self.name.clone(),
            signature: self.signature.clone(),
            return_kinds: self.return_kinds.to_vec(),
        }
    }

    /// Run the bound callable. Arguments must already match the signature.
    pub(crate) fn call(&self, args: Vec<ArgumentValue>) -> Result<Vec<ArgumentValue>, CallableFailure> {
        (self.invoke)(args)
    }
}

impl fmt::Debug for CallableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableDescriptor")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("return_kinds", &self.return_kinds)
            .field("native", &self.native.is_some())
            .finish_non_exhaustive()
    }
}

/// Owned metadata for a registered callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableInfo {
    pub name: String,
    pub signature: ParameterSignature,
    pub return_kinds: Vec<Kind>,
}

impl CallableInfo {
    pub fn return_arity(&self) -> usize {
        self.return_kinds.len()
    }
}

impl fmt::Display for CallableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} -> ", self.name, self.signature)?;
        match self.return_kinds.as_slice() {
            [single] => write!(f, "{single}"),
            many => {
                f.write_str("(")?;
                for (i, kind) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                f.write_str(")")
            }
        }
    }
}

fn build_signature(name: &str, kinds: Vec<Kind>) -> Result<ParameterSignature, RegistrationError> {
    ParameterSignature::new(kinds).map_err(|err| RegistrationError::UnsupportedSignature {
        name: name.to_string(),
        reason: UnsupportedReason::from(err),
    })
}

fn build_return_kinds(name: &str, kinds: Vec<Kind>) -> Result<Box<[Kind]>, RegistrationError> {
    if kinds.is_empty() {
        return Err(RegistrationError::UnsupportedSignature {
            name: name.to_string(),
            reason: UnsupportedReason::NoReturnValues,
        });
    }
    Ok(kinds.into_boxed_slice())
}
