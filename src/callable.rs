//! Adapting native Rust callables to the uniform call shape.
//!
//! Registration introspects a callable through its *type*: [`IntoCallable`] is implemented for every
//! `Fn(A1, ..., An) -> R` whose parameters implement [`FromArgument`] and whose return type implements
//! [`CallableOutput`]. The parameter kinds and return kinds are read off those impls once, when the descriptor is
//! built, and never rediscovered per call.
//!
//! ## Supported shapes
//! - Parameters: `bool`, `i64`, `f64`, `String`, or `ArgumentValue` (the `any` wildcard); up to six of them.
//! - Returns: one of those scalars, a tuple of two to four, or `Result<T, E>` of those where `E` converts into a
//!   [`CallableFailure`]. `()` is accepted by the type system but rejected at registration (no return values).
//!
//! ## Examples
//! ```rust
//! use funcmap::callable::IntoCallable;
//! use funcmap::{ArgumentValue, Kind};
//!
//! fn split_len(s: String) -> (i64, i64) {
//!     let n = s.chars().count() as i64;
//!     (n, n + 2)
//! }
//!
//! assert_eq!(<fn(String) -> (i64, i64) as IntoCallable<(String,)>>::parameter_kinds(), vec![Kind::String]);
//! let values = (split_len as fn(String) -> (i64, i64)).invoke_values(vec![ArgumentValue::from("hi")]).unwrap();
//! assert_eq!(values, vec![ArgumentValue::Int64(2), ArgumentValue::Int64(4)]);
//! ```

use funcmap_core::{ArgumentValue, Kind};

use crate::errors::CallableFailure;

/// A native type that can be read out of an already-coerced argument.
pub trait FromArgument: Sized {
    /// The parameter kind this type declares.
    const KIND: Kind;

    /// Extract the native value. Returns `None` only if `value` does not have kind [`Self::KIND`].
    fn from_argument(value: ArgumentValue) -> Option<Self>;
}

/// A native type that can be returned as a single result value.
pub trait IntoArgument {
    /// The result kind this type produces.
    const KIND: Kind;

    fn into_argument(self) -> ArgumentValue;
}

/// The full return shape of a callable: zero or more values, or a failure.
pub trait CallableOutput {
    /// Result kinds in declaration order. The return arity is their count.
    fn return_kinds() -> Vec<Kind>;

    fn into_values(self) -> Result<Vec<ArgumentValue>, CallableFailure>;
}

/// A native callable whose shape is known from its type.
///
/// `Args` is the tuple of parameter types; it only exists to keep the per-arity impls apart.
pub trait IntoCallable<Args>: Send + Sync + 'static {
    fn parameter_kinds() -> Vec<Kind>;

    fn return_kinds() -> Vec<Kind>;

    /// Call with arguments that have already been checked against [`Self::parameter_kinds`].
    ///
    /// ## Panics
    /// - If `args` does not match the declared parameter kinds. The invoker never lets that happen.
    fn invoke_values(&self, args: Vec<ArgumentValue>) -> Result<Vec<ArgumentValue>, CallableFailure>;
}

impl FromArgument for bool {
    const KIND: Kind = Kind::Bool;

    fn from_argument(value: ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromArgument for i64 {
    const KIND: Kind = Kind::Int64;

    fn from_argument(value: ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Int64(n) => Some(n),
            _ => None,
        }
    }
}

impl FromArgument for f64 {
    const KIND: Kind = Kind::Float64;

    fn from_argument(value: ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::Float64(x) => Some(x),
            _ => None,
        }
    }
}

impl FromArgument for String {
    const KIND: Kind = Kind::String;

    fn from_argument(value: ArgumentValue) -> Option<Self> {
        match value {
            ArgumentValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FromArgument for ArgumentValue {
    const KIND: Kind = Kind::Any;

    fn from_argument(value: ArgumentValue) -> Option<Self> {
        Some(value)
    }
}

macro_rules! impl_into_argument {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl IntoArgument for $ty {
                const KIND: Kind = $kind;

                fn into_argument(self) -> ArgumentValue {
                    ArgumentValue::from(self)
                }
            }

            impl CallableOutput for $ty {
                fn return_kinds() -> Vec<Kind> {
                    vec![$kind]
                }

                fn into_values(self) -> Result<Vec<ArgumentValue>, CallableFailure> {
                    Ok(vec![self.into_argument()])
                }
            }
        )*
    };
}

impl_into_argument! {
    bool => Kind::Bool,
    i64 => Kind::Int64,
    f64 => Kind::Float64,
    String => Kind::String,
    &'static str => Kind::String,
    ArgumentValue => Kind::Any,
}

impl CallableOutput for () {
    fn return_kinds() -> Vec<Kind> {
        Vec::new()
    }

    fn into_values(self) -> Result<Vec<ArgumentValue>, CallableFailure> {
        Ok(Vec::new())
    }
}

macro_rules! impl_tuple_output {
    ($($T:ident $v:ident),+) => {
        impl<$($T: IntoArgument),+> CallableOutput for ($($T,)+) {
            fn return_kinds() -> Vec<Kind> {
                vec![$($T::KIND),+]
            }

            fn into_values(self) -> Result<Vec<ArgumentValue>, CallableFailure> {
                let ($($v,)+) = self;
                Ok(vec![$($v.into_argument()),+])
            }
        }
    };
}

impl_tuple_output!(A a, B b);
impl_tuple_output!(A a, B b, C c);
impl_tuple_output!(A a, B b, C c, D d);

impl<T, E> CallableOutput for Result<T, E>
where
    T: CallableOutput,
    E: Into<CallableFailure>,
{
    fn return_kinds() -> Vec<Kind> {
        T::return_kinds()
    }

    fn into_values(self) -> Result<Vec<ArgumentValue>, CallableFailure> {
        match self {
            Ok(value) => value.into_values(),
            Err(failure) => Err(failure.into()),
        }
    }
}

macro_rules! impl_into_callable {
    ($($A:ident $a:ident),*) => {
        impl<F, R, $($A,)*> IntoCallable<($($A,)*)> for F
        where
            F: Fn($($A),*) -> R + Send + Sync + 'static,
            R: CallableOutput,
            $($A: FromArgument,)*
        {
            fn parameter_kinds() -> Vec<Kind> {
                vec![$($A::KIND),*]
            }

            fn return_kinds() -> Vec<Kind> {
                R::return_kinds()
            }

            #[allow(unused_mut, unused_variables)]
            fn invoke_values(&self, args: Vec<ArgumentValue>) -> Result<Vec<ArgumentValue>, CallableFailure> {
                let mut args = args.into_iter();
                $(
                    let $a = args
                        .next()
                        .and_then($A::from_argument)
                        .expect("INVARIANT: arguments are coerced to the signature before the call");
                )*
                (self)($($a),*).into_values()
            }
        }
    };
}

impl_into_callable!();
impl_into_callable!(A1 a1);
impl_into_callable!(A1 a1, A2 a2);
impl_into_callable!(A1 a1, A2 a2, A3 a3);
impl_into_callable!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_into_callable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_into_callable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fmt;

    fn kinds_of<F: IntoCallable<Args>, Args>(_: &F) -> (Vec<Kind>, Vec<Kind>) {
        (F::parameter_kinds(), F::return_kinds())
    }

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    #[test]
    fn parameter_kinds_follow_declaration_order() {
        let f = |_: String, _: i64, _: bool, _: f64, _: ArgumentValue| 0_i64;
        let (params, returns) = kinds_of(&f);
        assert_eq!(params, vec![Kind::String, Kind::Int64, Kind::Bool, Kind::Float64, Kind::Any]);
        assert_eq!(returns, vec![Kind::Int64]);
    }

    #[test]
    fn tuple_returns_report_each_kind() {
        let f = |s: String| (s.len() as i64, s, true);
        let (_, returns) = kinds_of(&f);
        assert_eq!(returns, vec![Kind::Int64, Kind::String, Kind::Bool]);
    }

    #[test]
    fn unit_return_has_no_kinds() {
        let f = || ();
        let (params, returns) = kinds_of(&f);
        assert!(params.is_empty());
        assert!(returns.is_empty());
    }

    #[test]
    fn result_return_uses_ok_kinds() {
        let f = |n: i64| -> Result<(i64, f64), Refused> { Ok((n, n as f64)) };
        let (_, returns) = kinds_of(&f);
        assert_eq!(returns, vec![Kind::Int64, Kind::Float64]);
    }

    #[test]
    fn invoke_values_passes_arguments_in_order() {
        let sub = |a: i64, b: i64| a - b;
        let out = sub.invoke_values(vec![ArgumentValue::Int64(10), ArgumentValue::Int64(4)]).unwrap();
        assert_eq!(out, vec![ArgumentValue::Int64(6)]);
    }

    #[test]
    fn err_payload_is_boxed_unmodified() {
        let f = |_: i64| -> Result<i64, Refused> { Err(Refused) };
        let failure = f.invoke_values(vec![ArgumentValue::Int64(1)]).unwrap_err();
        assert!(failure.downcast_ref::<Refused>().is_some());
    }

    #[test]
    fn any_parameter_receives_the_value_as_is() {
        let f = |v: ArgumentValue| v.classify().to_string();
        let out = f.invoke_values(vec![ArgumentValue::Float64(1.0)]).unwrap();
        assert_eq!(out, vec![ArgumentValue::from("float")]);
    }

    #[test]
    #[should_panic(expected = "INVARIANT")]
    fn invoke_values_with_unchecked_arguments_panics() {
        let f = |n: i64| n;
        let _ = f.invoke_values(vec![ArgumentValue::from("not an int")]);
    }
}
