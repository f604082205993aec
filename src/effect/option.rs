//! Option computations - success or absence.
//!
//! `OptionBuilder` sequences `Option<T>` values. A step that produces `None`
//! is terminal: no continuation scheduled after it runs.
//!
//! # Examples
//!
//! ```rust
//! use compexpr::cx;
//! use compexpr::effect::{OptionBuilder, none, some};
//!
//! fn try_divide(numerator: i32, denominator: i32) -> Option<i32> {
//!     if denominator == 0 { none() } else { some(numerator / denominator) }
//! }
//!
//! let builder = OptionBuilder;
//! let good = cx! { builder;
//!     a <= try_divide(120, 2);
//!     b <= try_divide(a, 3);
//!     c <= try_divide(b, 2);
//!     return c
//! };
//! assert_eq!(good, Some(10));
//!
//! let bad = cx! { builder;
//!     a <= try_divide(120, 2);
//!     b <= try_divide(a, 0);
//!     c <= try_divide(b, 2);
//!     return c
//! };
//! assert_eq!(bad, None);
//! ```

#![forbid(unsafe_code)]

use crate::builder::{ExpressionBuilder, Value};

/// Creates a present value.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Creates an absent value.
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

/// Builder for `Option<T>` computations.
///
/// `combine` is refused: two optional results have no natural merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionBuilder;

impl ExpressionBuilder for OptionBuilder {
    const NAME: &'static str = "OptionBuilder";

    type Computation<T: Value> = Option<T>;

    #[inline]
    fn bind<U, T, F>(&self, computation: Option<U>, continuation: F) -> Option<T>
    where
        U: Value,
        T: Value,
        F: Fn(U) -> Option<T> + 'static,
    {
        computation.and_then(continuation)
    }

    #[inline]
    fn pure<T: Value>(&self, value: T) -> Option<T> {
        Some(value)
    }

    #[inline]
    fn zero<T: Value>(&self) -> Option<T> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    #[case(some(3), Some(6))]
    #[case(none(), None)]
    fn bind_applies_continuation_only_when_present(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        let result = OptionBuilder.bind(input, |value| Some(value * 2));
        assert_eq!(result, expected);
    }

    #[rstest]
    fn bind_on_absent_does_not_invoke_continuation() {
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let result: Option<i32> = OptionBuilder.bind(none::<i32>(), move |value| {
            flag.set(true);
            Some(value)
        });
        assert_eq!(result, None);
        assert!(!called.get());
    }

    #[rstest]
    fn pure_and_zero() {
        assert_eq!(OptionBuilder.pure(42), Some(42));
        assert_eq!(OptionBuilder.zero::<i32>(), None);
    }

    #[rstest]
    fn combine_is_unsupported() {
        let error = OptionBuilder.combine(some(1), some(2)).unwrap_err();
        assert_eq!(error.builder, "OptionBuilder");
        assert_eq!(error.operation, "combine");
    }

    #[rstest]
    fn map_transforms_present_value() {
        assert_eq!(OptionBuilder.map(some(20), |value: i32| value + 1), Some(21));
        assert_eq!(OptionBuilder.map(none::<i32>(), |value: i32| value + 1), None);
    }
}
