//! Provide the type-erased value core shared by the funcmap registry and its adapters.
//!
//! This crate is intentionally small and dependency-light. It contains the data that crosses the registry
//! boundary and the pure checks performed on it:
//! - [`ArgumentValue`]: the tagged value every argument and result is carried in,
//! - [`Kind`] and its vocabulary table ([`kinds`]),
//! - [`ParameterSignature`]: the parameter kinds captured when a callable is registered,
//! - [`literal`]: text → value parsing for adapters that receive arguments as strings.
//!
//! ## Notes
//!
//! - This is a "value core" crate: **no IO**, no global state, no logging, and no registry types.
//! - Coercion is exact-match only; see [`ArgumentValue::coerce_to`].

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod kinds;
pub mod literal;
pub mod signature;
pub mod value;

pub use errors::{CoercionError, LiteralError, SignatureError};
pub use kinds::Kind;
pub use signature::ParameterSignature;
pub use value::ArgumentValue;
