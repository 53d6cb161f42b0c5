//! End-to-end invocation scenarios through the public API.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use funcmap::{
    ArgumentValue, CoercionError, InvocationError, InvocationResult, Kind, RegistrationError, Registry,
    UnsupportedReason,
};

fn adder_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register("add", |a: i64, b: i64| a + b).unwrap();
    registry
        .register("splitLen", |s: String| {
            let n = s.chars().count() as i64;
            (n, n + 2)
        })
        .unwrap();
    registry
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_a_two_int_adder() {
    let registry = adder_registry();
    let result = registry
        .invoke("add", vec![ArgumentValue::Int64(5), ArgumentValue::Int64(3)])
        .unwrap();
    assert_eq!(result, InvocationResult::Single(ArgumentValue::Int64(8)));
}

#[test]
fn scenario_b_missing_argument() {
    let registry = adder_registry();
    let err = registry.invoke("add", vec![ArgumentValue::Int64(5)]).unwrap_err();
    assert!(matches!(
        err,
        InvocationError::ArityMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn scenario_c_wrong_kind_at_position_zero() {
    let registry = adder_registry();
    let err = registry
        .invoke("add", vec![ArgumentValue::from("x"), ArgumentValue::Int64(3)])
        .unwrap_err();
    match err {
        InvocationError::Coercion { position, source, .. } => {
            assert_eq!(position, 0);
            assert_eq!(source, CoercionError::new(Kind::Int64, Kind::String));
        }
        other => panic!("expected a coercion error, got {other:?}"),
    }
}

#[test]
fn scenario_d_two_value_return() {
    let registry = adder_registry();
    let result = registry.invoke("splitLen", vec![ArgumentValue::from("hi")]).unwrap();
    assert_eq!(
        result,
        InvocationResult::Multiple(vec![ArgumentValue::Int64(2), ArgumentValue::Int64(4)])
    );
}

// ============================================================================
// Error table
// ============================================================================

#[derive(Debug, PartialEq)]
struct Overdrawn {
    short_by: i64,
}

impl fmt::Display for Overdrawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overdrawn by {}", self.short_by)
    }
}

impl std::error::Error for Overdrawn {}

#[test]
fn unknown_name_is_not_found() {
    let registry = adder_registry();
    let err = registry.invoke("sub", Vec::new()).unwrap_err();
    assert!(matches!(err, InvocationError::NameNotFound { ref name } if name == "sub"));
    assert!(err.is_dispatch_error());
}

#[test]
fn duplicate_registration_keeps_the_first() {
    let mut registry = adder_registry();
    let err = registry.register("add", |a: f64, b: f64| a + b).unwrap_err();
    assert!(matches!(err, RegistrationError::DuplicateName { .. }));
    assert_eq!(registry.lookup("add").unwrap().signature().kinds(), &[Kind::Int64, Kind::Int64]);
}

#[test]
fn zero_return_callables_are_unsupported() {
    let mut registry = Registry::new();
    let err = registry.register("log", |_: String| ()).unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::UnsupportedSignature {
            reason: UnsupportedReason::NoReturnValues,
            ..
        }
    ));

    let err = registry.register_raw("logRaw", [Kind::String], 0, |_| Ok(Vec::new())).unwrap_err();
    assert!(matches!(err, RegistrationError::UnsupportedSignature { .. }));
    assert!(registry.is_empty());
}

#[test]
fn sequence_parameters_are_unsupported() {
    let mut registry = Registry::new();
    let err = registry
        .register_raw("sum", [Kind::Sequence], 1, |_| Ok(vec![ArgumentValue::Int64(0)]))
        .unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::UnsupportedSignature {
            reason: UnsupportedReason::Parameter(_),
            ..
        }
    ));
}

#[test]
fn callable_failure_is_passed_through_unmodified() {
    let mut registry = Registry::new();
    registry
        .register("withdraw", |balance: i64, amount: i64| -> Result<i64, Overdrawn> {
            if amount > balance {
                Err(Overdrawn {
                    short_by: amount - balance,
                })
            } else {
                Ok(balance - amount)
            }
        })
        .unwrap();

    let err = registry
        .invoke("withdraw", vec![ArgumentValue::Int64(10), ArgumentValue::Int64(25)])
        .unwrap_err();
    assert!(err.is_callable_error());
    assert!(!err.is_dispatch_error());
    assert_eq!(
        err.callable_failure().and_then(|e| e.downcast_ref::<Overdrawn>()),
        Some(&Overdrawn { short_by: 15 })
    );
}

#[test]
#[should_panic(expected = "INVARIANT")]
fn raw_callable_breaking_its_arity_is_fatal() {
    let mut registry = Registry::new();
    registry
        .register_raw("pair", [Kind::Int64], 2, |args| Ok(args))
        .unwrap();
    let _ = registry.invoke("pair", vec![ArgumentValue::Int64(1)]);
}

// ============================================================================
// Call-count guarantees
// ============================================================================

#[test]
fn rejected_invocations_never_run_the_callable() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut registry = Registry::new();
    registry
        .register("count", move |n: i64| {
            counter.fetch_add(1, Ordering::SeqCst);
            n
        })
        .unwrap();

    let _ = registry.invoke("count", Vec::new());
    let _ = registry.invoke("count", vec![ArgumentValue::Int64(1), ArgumentValue::Int64(2)]);
    let _ = registry.invoke("count", vec![ArgumentValue::Float64(1.0)]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    registry.invoke("count", vec![ArgumentValue::Int64(1)]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Any, raw registration, and native recovery
// ============================================================================

#[test]
fn any_parameter_accepts_every_scalar_but_no_sequence() {
    let mut registry = Registry::new();
    registry.register("kind", |v: ArgumentValue| v.classify().to_string()).unwrap();

    for (value, expected) in [
        (ArgumentValue::Bool(true), "bool"),
        (ArgumentValue::Int64(1), "int"),
        (ArgumentValue::Float64(1.0), "float"),
        (ArgumentValue::from("s"), "str"),
    ] {
        let result = registry.invoke("kind", vec![value]).unwrap();
        assert_eq!(result, InvocationResult::Single(ArgumentValue::from(expected)));
    }

    let err = registry
        .invoke("kind", vec![ArgumentValue::Sequence(vec![ArgumentValue::Int64(1)])])
        .unwrap_err();
    assert!(matches!(err, InvocationError::Coercion { .. }));
}

#[test]
fn raw_registration_receives_coerced_arguments() {
    let mut registry = Registry::new();
    registry
        .register_raw("swap", [Kind::Int64, Kind::String], 2, |mut args| {
            args.reverse();
            Ok(args)
        })
        .unwrap();

    let info = registry.describe("swap").unwrap();
    assert_eq!(info.to_string(), "swap(int, str) -> (any, any)");

    let result = registry
        .invoke("swap", vec![ArgumentValue::Int64(1), ArgumentValue::from("a")])
        .unwrap();
    assert_eq!(result.values(), &[ArgumentValue::from("a"), ArgumentValue::Int64(1)]);
}

#[test]
fn native_callable_can_be_recovered_by_type() {
    fn greet(name: String) -> String {
        format!("Hello, {name}")
    }

    let mut registry = Registry::new();
    registry.register("greet", greet as fn(String) -> String).unwrap();
    let native = registry
        .lookup("greet")
        .and_then(|d| d.downcast_native::<fn(String) -> String>())
        .copied()
        .unwrap();
    assert_eq!(native("Alice".to_string()), "Hello, Alice");
}

#[test]
fn zero_parameter_callables_are_invoked_with_no_arguments() {
    let mut registry = Registry::new();
    registry.register("answer", || 42_i64).unwrap();
    assert_eq!(
        registry.invoke("answer", Vec::new()).unwrap(),
        InvocationResult::Single(ArgumentValue::Int64(42))
    );
}
