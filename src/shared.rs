//! A [`Registry`] behind a read/write lock, for registration that interleaves with concurrent invocation.
//!
//! ## Notes
//! - Registration and unregistration take the write lock. Lookups take the read lock.
//! - `invoke` holds the read lock only long enough to clone the descriptor handle. The callable runs with no lock
//!   held, so a long-running callable never blocks registration, and a callable may itself use the registry.
//! - An invocation that resolved its descriptor before a concurrent `unregister` completes against that
//!   descriptor. Every invocation observes either the state before a registration or the state after it.

use std::sync::Arc;

use funcmap_core::{ArgumentValue, Kind};
use parking_lot::{RwLock, RwLockReadGuard};

use crate::callable::IntoCallable;
use crate::config::RegistryConfig;
use crate::descriptor::CallableInfo;
use crate::errors::{CallableFailure, InvocationError, RegistrationError};
use crate::invoker::{InvocationResult, invoke_descriptor};
use crate::registry::Registry;

/// Cloneable handle to a lock-guarded [`Registry`]. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::from(Registry::with_config(config))
    }

    /// See [`Registry::register`].
    pub fn register<F, Args>(&self, name: &str, callable: F) -> Result<(), RegistrationError>
    where
        F: IntoCallable<Args>,
        Args: 'static,
    {
        self.inner.write().register(name, callable)
    }

    /// See [`Registry::register_raw`].
    pub fn register_raw<G>(
        &self,
        name: &str,
        parameter_kinds: impl IntoIterator<Item = Kind>,
        return_arity: usize,
        callable: G,
    ) -> Result<(), RegistrationError>
    where
        G: Fn(Vec<ArgumentValue>) -> Result<Vec<ArgumentValue>, CallableFailure> + Send + Sync + 'static,
    {
        self.inner.write().register_raw(name, parameter_kinds, return_arity, callable)
    }

    pub fn unregister(&self, name: &str) -> bool {
        self.inner.write().unregister(name)
    }

    /// See [`Invoker::invoke`](crate::Invoker::invoke).
    #[tracing::instrument(skip_all, fields(name = %name, argc = args.len()))]
    pub fn invoke(&self, name: &str, args: Vec<ArgumentValue>) -> Result<InvocationResult, InvocationError> {
        let descriptor = self
            .inner
            .read()
            .lookup_shared(name)
            .ok_or_else(|| InvocationError::NameNotFound { name: name.to_string() })?;
        invoke_descriptor(&descriptor, args)
    }

    pub fn describe(&self, name: &str) -> Option<CallableInfo> {
        self.inner.read().describe(name)
    }

    /// Registered names, in registration order, as of the moment of the call.
    pub fn list(&self) -> Vec<String> {
        self.inner.read().list().into_iter().map(str::to_string).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Hold the read lock for several lookups in a row. Registration blocks until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_registry() {
        let shared = SharedRegistry::new();
        let other = shared.clone();
        shared.register("double", |n: i64| n * 2).unwrap();
        assert!(other.contains("double"));
        assert_eq!(
            other.invoke("double", vec![ArgumentValue::Int64(4)]).unwrap(),
            InvocationResult::Single(ArgumentValue::Int64(8))
        );
    }

    #[test]
    fn callable_may_reenter_the_registry() {
        let shared = SharedRegistry::new();
        shared.register("base", || 40_i64).unwrap();
        let handle = shared.clone();
        shared
            .register("plusTwo", move || -> Result<i64, InvocationError> {
                let base = handle.invoke("base", Vec::new())?;
                Ok(base.into_single().and_then(|v| v.as_int64().ok()).unwrap_or_default() + 2)
            })
            .unwrap();
        assert_eq!(
            shared.invoke("plusTwo", Vec::new()).unwrap(),
            InvocationResult::Single(ArgumentValue::Int64(42))
        );
    }

    #[test]
    fn from_registry_keeps_entries_and_config() {
        let mut registry = Registry::with_config(RegistryConfig::new().with_name_validation(false));
        registry.register("a b", || true).unwrap();
        let shared = SharedRegistry::from(registry);
        assert_eq!(shared.list(), vec!["a b".to_string()]);
        assert!(!shared.read().config().validate_names);
    }

    #[test]
    fn unregister_is_visible_to_later_invocations() {
        let shared = SharedRegistry::new();
        shared.register("x", || 1_i64).unwrap();
        assert!(shared.unregister("x"));
        let err = shared.invoke("x", Vec::new()).unwrap_err();
        assert!(matches!(err, InvocationError::NameNotFound { .. }));
        assert!(shared.is_empty());
    }
}
