#![cfg(all(feature = "option", feature = "sequence", feature = "state", feature = "cancellable"))]
//! Property-based tests for the builder laws.
//!
//! Tests the following laws using proptest, for every builder:
//!
//! - Left Identity: bind(pure(a), f) == f(a)
//! - Right Identity: bind(m, pure) == m
//! - Associativity: bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//! - Map Identity: map(m, |x| x) == m
//!
//! Computations are compared through an `observe` function: directly for
//! `Option` and `Sequence`, after running for `State` and `Cancellable`.

use compexpr::builder::ExpressionBuilder;
use compexpr::effect::{
    Cancellable, CancellableBuilder, OptionBuilder, Sequence, SequenceBuilder, State, StateBuilder,
};
use paste::paste;
use proptest::prelude::*;

/// Generates the law tests for one builder.
///
/// `lift` turns an `i32` into a computation with some effect, and
/// `observe` turns a computation into something comparable.
macro_rules! builder_laws {
    ($name:ident, $builder:expr, lift = $lift:expr, observe = $observe:expr $(,)?) => {
        paste! {
            proptest! {
                #[test]
                fn [<prop_ $name _left_identity>](value in -1000i32..1000i32) {
                    let builder = $builder;
                    let lift = $lift;
                    let observe = $observe;
                    let function = move |a: i32| lift(a.wrapping_mul(3));

                    let left = builder.bind(builder.pure(value), function);
                    let right = function(value);

                    prop_assert_eq!(observe(&left), observe(&right));
                }

                #[test]
                fn [<prop_ $name _right_identity>](value in -1000i32..1000i32) {
                    let builder = $builder;
                    let lift = $lift;
                    let observe = $observe;

                    let left = builder.bind(lift(value), move |x: i32| builder.pure(x));
                    let right = lift(value);

                    prop_assert_eq!(observe(&left), observe(&right));
                }

                #[test]
                fn [<prop_ $name _associativity>](value in -1000i32..1000i32) {
                    let builder = $builder;
                    let lift = $lift;
                    let observe = $observe;
                    let function1 = move |a: i32| lift(a.wrapping_mul(3));
                    let function2 = move |a: i32| lift(a.wrapping_add(1));

                    let left = builder.bind(builder.bind(lift(value), function1), function2);
                    let right = builder.bind(lift(value), move |x: i32| {
                        builder.bind(function1(x), function2)
                    });

                    prop_assert_eq!(observe(&left), observe(&right));
                }

                #[test]
                fn [<prop_ $name _map_identity>](value in -1000i32..1000i32) {
                    let builder = $builder;
                    let lift = $lift;
                    let observe = $observe;

                    let left = builder.map(lift(value), |x: i32| x);
                    let right = lift(value);

                    prop_assert_eq!(observe(&left), observe(&right));
                }
            }
        }
    };
}

// =============================================================================
// Option
// =============================================================================

builder_laws!(
    option,
    OptionBuilder,
    lift = |a: i32| if a % 5 == 0 { None } else { Some(a) },
    observe = |computation: &Option<i32>| *computation,
);

// =============================================================================
// Sequence
// =============================================================================

builder_laws!(
    sequence,
    SequenceBuilder,
    lift = |a: i32| {
        if a % 5 == 0 {
            Sequence::empty()
        } else {
            Sequence::from_list(vec![a, a.wrapping_add(1)])
        }
    },
    observe = |computation: &Sequence<i32>| computation.to_vec(),
);

// =============================================================================
// State
// =============================================================================

builder_laws!(
    state,
    StateBuilder::<i32>::new(),
    lift = |a: i32| State::new(move |s: i32| (a.wrapping_add(s), s.wrapping_add(1))),
    observe = |computation: &State<i32, i32>| computation.run(7),
);

// =============================================================================
// Cancellable
// =============================================================================

builder_laws!(
    cancellable,
    CancellableBuilder,
    lift = |a: i32| Cancellable::new(move |_| (a, a % 7 == 0)),
    observe = |computation: &Cancellable<i32>| computation.run_uncancelled(),
);
