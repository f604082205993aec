#![cfg(feature = "option")]
//! Unit tests for Option computation expressions.
//!
//! Tests:
//! - Division chains that succeed and that hit a zero divisor
//! - Continuations after an absent step never run
//! - Nested runs of the same builder

use std::cell::Cell;
use std::rc::Rc;

use compexpr::builder::ExpressionBuilder;
use compexpr::cx;
use compexpr::effect::{OptionBuilder, none, some};
use rstest::rstest;

fn try_divide(numerator: i32, denominator: i32) -> Option<i32> {
    if denominator == 0 {
        none()
    } else {
        some(numerator / denominator)
    }
}

fn division_chain(second_divisor: i32, called: Rc<Cell<bool>>) -> Option<i32> {
    let builder = OptionBuilder;
    cx! { builder;
        val1 <= try_divide(120, 2);
        let called = Rc::clone(&called);
        val2 <= try_divide(val1, second_divisor);
        let () = called.set(true);
        val3 <= try_divide(val2, 2);
        return val3
    }
}

// =============================================================================
// Division Chains
// =============================================================================

#[rstest]
fn good_chain_is_present_and_runs_every_step() {
    let called = Rc::new(Cell::new(false));
    let result = division_chain(3, Rc::clone(&called));
    assert_eq!(result, Some(10));
    assert!(called.get());
}

#[rstest]
fn zero_divisor_is_absent_and_stops_the_chain() {
    let called = Rc::new(Cell::new(false));
    let result = division_chain(0, Rc::clone(&called));
    assert_eq!(result, None);
    assert!(!called.get());
}

#[rstest]
#[case(1, Some(30))]
#[case(2, Some(15))]
#[case(5, Some(6))]
#[case(0, None)]
fn chain_matches_plain_arithmetic(#[case] divisor: i32, #[case] expected: Option<i32>) {
    let called = Rc::new(Cell::new(false));
    assert_eq!(division_chain(divisor, called), expected);
}

#[rstest]
fn explicit_builder_calls_match_macro() {
    let builder = OptionBuilder;
    let result = builder.bind(some(120), move |value| {
        builder.bind(try_divide(value, 2), move |half| {
            builder.bind(try_divide(half, 3), move |third| try_divide(third, 2))
        })
    });
    assert_eq!(result, Some(10));
}

// =============================================================================
// Nesting
// =============================================================================

#[rstest]
fn nested_run_of_same_builder() {
    let outer = OptionBuilder.run(|builder| {
        let inner = builder.run(|inner_builder| {
            let inner_builder = *inner_builder;
            cx! { inner_builder;
                i <= some(42);
                return i
            }
        });
        builder.bind(inner, some)
    });
    assert_eq!(outer, Some(42));
}

#[rstest]
fn independent_nested_runs_do_not_interfere() {
    let builder = OptionBuilder;
    let result = cx! { builder;
        doubled <= builder.run(|inner| inner.bind(some(3), |value| some(value * 2)));
        fallback <= builder.run(|inner| inner.zero::<i32>()).or(some(1));
        return doubled + fallback
    };
    assert_eq!(result, Some(7));
}

// =============================================================================
// Builder Operations
// =============================================================================

#[rstest]
fn then_discards_first_value() {
    assert_eq!(OptionBuilder.then(some(1), some("next")), Some("next"));
    assert_eq!(OptionBuilder.then(none::<i32>(), some("next")), None);
}

#[rstest]
fn combine_reports_unsupported_operation() {
    let error = OptionBuilder.combine(some(1), some(2)).unwrap_err();
    assert_eq!(error.to_string(), "combine is not supported by OptionBuilder");
}

#[rstest]
fn checked_division_chain_with_typed_start() {
    let builder = OptionBuilder;
    let result = cx! { builder;
        a <= Some(120_i32);
        b <= a.checked_div(2);
        c <= b.checked_div(3);
        return c + 1
    };
    assert_eq!(result, Some(21));
    assert_eq!(OptionBuilder.bind(Some(1_i32), |value| value.checked_div(0)), None);
}
