//! The stock callables shipped with the `funcmap` binary.
//!
//! These double as worked examples of each supported shape: two parameters, string in/string out, a two-value
//! return, and a fallible callable.

use funcmap_core::ArgumentValue;
use thiserror::Error;

use crate::errors::RegistrationError;
use crate::registry::Registry;

/// Failure payload of `safeDiv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
}

fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

fn greet(name: String) -> String {
    format!("Hello, {name}")
}

fn uppercase(s: String) -> String {
    s.to_uppercase()
}

/// Length in UTF-8 bytes.
fn count_chars(s: String) -> i64 {
    s.len() as i64
}

fn split_len(s: String) -> (i64, i64) {
    let n = count_chars(s);
    (n, n.wrapping_add(2))
}

fn double(n: i64) -> i64 {
    n.wrapping_mul(2)
}

fn square(n: i64) -> i64 {
    n.wrapping_mul(n)
}

fn first(x: String) -> String {
    format!("hello {x}")
}

fn second(x: String) -> String {
    format!("greet {x}")
}

fn safe_div(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    if b == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ArithmeticError::Overflow)
}

fn kind_of(value: ArgumentValue) -> String {
    value.classify().to_string()
}

/// Register every builtin into `registry`, in listing order.
///
/// ## Errors
/// - [`RegistrationError::DuplicateName`] if `registry` already holds one of the builtin names. Builtins
///   registered before the clash stay registered.
pub fn register_builtins(registry: &mut Registry) -> Result<(), RegistrationError> {
    registry.register("add", add)?;
    registry.register("greet", greet)?;
    registry.register("uppercase", uppercase)?;
    registry.register("countChars", count_chars)?;
    registry.register("splitLen", split_len)?;
    registry.register("double", double)?;
    registry.register("square", square)?;
    registry.register("first", first)?;
    registry.register("second", second)?;
    registry.register("safeDiv", safe_div)?;
    registry.register("kindOf", kind_of)?;
    Ok(())
}

/// A fresh registry holding only the builtins.
pub fn builtin_registry() -> Result<Registry, RegistrationError> {
    let mut registry = Registry::new();
    register_builtins(&mut registry)?;
    Ok(registry)
}

/// The calls replayed by `funcmap demo`, as (name, arguments).
pub fn demo_calls() -> Vec<(&'static str, Vec<ArgumentValue>)> {
    vec![
        ("add", vec![ArgumentValue::Int64(5), ArgumentValue::Int64(3)]),
        ("greet", vec![ArgumentValue::from("Alice")]),
        ("uppercase", vec![ArgumentValue::from("golang")]),
        ("countChars", vec![ArgumentValue::from("Hello, World!")]),
        ("splitLen", vec![ArgumentValue::from("Hello, World!")]),
        ("double", vec![ArgumentValue::Int64(4)]),
        ("square", vec![ArgumentValue::Int64(4)]),
        ("first", vec![ArgumentValue::from("john")]),
        ("second", vec![ArgumentValue::from("david")]),
        ("safeDiv", vec![ArgumentValue::Int64(7), ArgumentValue::Int64(0)]),
    ]
}
