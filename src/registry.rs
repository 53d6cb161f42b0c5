//! The name → descriptor registry.
//!
//! A [`Registry`] is an owned value: build it, register callables into it, then hand `&Registry` to whatever needs
//! to invoke them. There is no process-wide instance.
//!
//! ## Notes
//! - Registration takes `&mut self` and lookups take `&self`, so the borrow checker already enforces
//!   "register first, then read from many places". For registration that must interleave with concurrent
//!   invocation, wrap the registry in a [`SharedRegistry`](crate::SharedRegistry).
//! - Names are unique. Registering a taken name fails with [`RegistrationError::DuplicateName`] and leaves the
//!   existing descriptor in place; to replace behavior, [`unregister`](Registry::unregister) first.
//! - [`list`](Registry::list) reports names in registration order.

use std::fmt;
use std::sync::Arc;

use funcmap_core::{ArgumentValue, Kind};
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::callable::IntoCallable;
use crate::config::RegistryConfig;
use crate::descriptor::{CallableDescriptor, CallableInfo};
use crate::errors::{CallableFailure, InvocationError, RegistrationError};
use crate::invoker::{InvocationResult, Invoker};

/// Owned mapping from name to [`CallableDescriptor`].
pub struct Registry {
    entries: IndexMap<String, Arc<CallableDescriptor>>,
    config: RegistryConfig,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: IndexMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a native callable under `name`.
    ///
    /// The callable's parameter kinds and return kinds are read from its type exactly once, here.
    ///
    /// ## Errors
    /// - [`RegistrationError::InvalidName`] if name validation is enabled and `name` is rejected.
    /// - [`RegistrationError::DuplicateName`] if `name` is already registered.
    /// - [`RegistrationError::UnsupportedSignature`] if the callable returns no values.
    ///
    /// ## Examples
    /// ```rust
    /// use funcmap::{ArgumentValue, InvocationResult, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.register("add", |a: i64, b: i64| a + b).unwrap();
    /// registry.register("greet", |name: String| format!("Hello, {name}")).unwrap();
    ///
    /// let sum = registry.invoke("add", vec![ArgumentValue::Int64(5), ArgumentValue::Int64(3)]).unwrap();
    /// assert_eq!(sum, InvocationResult::Single(ArgumentValue::Int64(8)));
    /// assert_eq!(registry.list(), vec!["add", "greet"]);
    /// ```
    #[tracing::instrument(skip_all, fields(name = %name))]
    pub fn register<F, Args>(&mut self, name: &str, callable: F) -> Result<(), RegistrationError>
    where
        F: IntoCallable<Args>,
        Args: 'static,
    {
        self.check_available(name)?;
        let descriptor = CallableDescriptor::from_callable(name.to_string(), callable)?;
        self.insert(descriptor)
    }

    /// Register a callable whose parameter kinds and return arity are declared explicitly.
    ///
    /// The callable receives arguments already coerced to `parameter_kinds` and must produce exactly
    /// `return_arity` values on success; producing any other count is treated as a fatal consistency fault when it
    /// is invoked.
    ///
    /// ## Errors
    /// - [`RegistrationError::InvalidName`] / [`RegistrationError::DuplicateName`] as for [`register`](Self::register).
    /// - [`RegistrationError::UnsupportedSignature`] if `return_arity` is zero or a parameter kind is
    ///   [`Kind::Sequence`].
    #[tracing::instrument(skip_all, fields(name = %name, return_arity = return_arity))]
    pub fn register_raw<G>(
        &mut self,
        name: &str,
        parameter_kinds: impl IntoIterator<Item = Kind>,
        return_arity: usize,
        callable: G,
    ) -> Result<(), RegistrationError>
    where
        G: Fn(Vec<ArgumentValue>) -> Result<Vec<ArgumentValue>, CallableFailure> + Send + Sync + 'static,
    {
        self.check_available(name)?;
        let descriptor =
            CallableDescriptor::from_raw(name.to_string(), parameter_kinds.into_iter().collect(), return_arity, callable)?;
        self.insert(descriptor)
    }

    /// Remove `name`. Returns whether it was registered.
    ///
    /// The remaining names keep their relative registration order.
    #[tracing::instrument(skip_all, fields(name = %name))]
    pub fn unregister(&mut self, name: &str) -> bool {
        let removed = self.entries.shift_remove(name).is_some();
        if removed {
            tracing::debug!("unregistered callable");
        }
        removed
    }

    pub fn lookup(&self, name: &str) -> Option<&CallableDescriptor> {
        self.entries.get(name).map(Arc::as_ref)
    }

    pub(crate) fn lookup_shared(&self, name: &str) -> Option<Arc<CallableDescriptor>> {
        self.entries.get(name).cloned()
    }

    pub fn describe(&self, name: &str) -> Option<CallableInfo> {
        self.lookup(name).map(CallableDescriptor::info)
    }

    /// Registered names, in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Descriptors, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CallableDescriptor> {
        self.entries.values().map(Arc::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke `name` with `args` through an [`Invoker`] over this registry.
    pub fn invoke(&self, name: &str, args: Vec<ArgumentValue>) -> Result<InvocationResult, InvocationError> {
        Invoker::new(self).invoke(name, args)
    }

    fn check_available(&self, name: &str) -> Result<(), RegistrationError> {
        if !self.config.accepts_name(name) {
            return Err(RegistrationError::InvalidName { name: name.to_string() });
        }
        if self.entries.contains_key(name) {
            return Err(RegistrationError::DuplicateName { name: name.to_string() });
        }
        Ok(())
    }

    fn insert(&mut self, descriptor: CallableDescriptor) -> Result<(), RegistrationError> {
        match self.entries.entry(descriptor.name().to_string()) {
            Entry::Occupied(entry) => Err(RegistrationError::DuplicateName {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                tracing::debug!(
                    signature = %descriptor.signature(),
                    return_arity = descriptor.return_arity(),
                    "registered callable"
                );
                entry.insert(Arc::new(descriptor));
                Ok(())
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.list())
            .field("config", &self.config)
            .finish()
    }
}
