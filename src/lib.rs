#![forbid(unsafe_code)]
//! funcmap: a registry of heterogeneous callables behind one uniform call path
//!
//! Native functions of different shapes are registered under string names and invoked by name with a list of
//! type-erased [`ArgumentValue`]s. Registration reads each callable's parameter kinds and return kinds off its type
//! once; every invocation then checks arity and argument kinds against that record before the callable runs, and
//! normalizes what it returns into an [`InvocationResult`].
//!
//! ## Layout
//!
//! - `funcmap_core` (re-exported here): values, the kind vocabulary, signatures, literal parsing.
//! - [`callable`]: the traits that adapt `Fn(..) -> R` into the uniform shape.
//! - [`registry`] / [`shared`]: owned and lock-guarded name → descriptor maps.
//! - [`invoker`]: the validation and dispatch path.
//! - [`builtins`] / [`cli`]: the stock callables and the `funcmap` binary.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The crate root and the `cli`
//!   module enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a registry bug (a descriptor whose recorded shape disagrees with its
//!   callable), use `.expect("INVARIANT: reason")` or `panic!("INVARIANT: ...")` with a clear explanation.

#![deny(clippy::unwrap_used)]

pub mod builtins;
pub mod callable;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod invoker;
pub mod registry;
pub mod shared;

pub use funcmap_core::literal::{parse_literal, parse_literals};
pub use funcmap_core::{ArgumentValue, CoercionError, Kind, LiteralError, ParameterSignature, SignatureError};

pub use config::RegistryConfig;
pub use descriptor::{CallableDescriptor, CallableInfo};
pub use errors::{CallableFailure, InvocationError, RegistrationError, UnsupportedReason};
pub use invoker::{InvocationResult, Invoker};
pub use registry::Registry;
pub use shared::SharedRegistry;
