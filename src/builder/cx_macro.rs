//! cx! macro for computation expressions over any builder.
//!
//! The macro rewrites a block of sequential steps into explicit calls on a
//! builder, in the style of do-notation:
//!
//! - `pattern <= computation;` - Bind: extracts the value of a computation
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression;` - Records a value, then continues (needs
//!   [`CombineBuilder`](crate::builder::CombineBuilder))
//! - `return expression` - Final value, lifted with `pure`
//! - `computation` - Final computation, used as-is
//!
//! The first token is the identifier of the builder value, followed by `;`.
//! The builder is cloned into every continuation, so it must be `Clone`
//! (all builders in this crate are `Copy`).
//!
//! # Examples
//!
//! ## Option
//!
//! ```rust
//! # #[cfg(feature = "option")] {
//! use compexpr::cx;
//! use compexpr::effect::OptionBuilder;
//!
//! let builder = OptionBuilder;
//! let result = cx! { builder;
//!     x <= Some(5);
//!     y <= Some(10);
//!     let z = x + y;
//!     return z * 2
//! };
//! assert_eq!(result, Some(30));
//! # }
//! ```
//!
//! ## Sequence with yield
//!
//! ```rust
//! # #[cfg(feature = "sequence")] {
//! use compexpr::cx;
//! use compexpr::effect::{Sequence, SequenceBuilder};
//!
//! let builder = SequenceBuilder;
//! let result = cx! { builder;
//!     x <= Sequence::from_list(vec![1, 2]);
//!     yield x;
//!     return x * 10
//! };
//! assert_eq!(result.into_vec(), vec![1, 10, 2, 20]);
//! # }
//! ```
//!
//! # Implementation Notes
//!
//! `pattern <= computation; rest` expands into:
//!
//! ```rust,ignore
//! ExpressionBuilder::bind(&builder, computation, move |pattern| { /* rest */ })
//! ```
//!
//! and `yield value; rest` into `CombineBuilder::concat(&builder, pure(value), rest)`.
//! Continuations are `Fn`, so outer non-`Copy` values used inside them must
//! be cloned explicitly.

#![forbid(unsafe_code)]

/// A macro for computation expressions in do-notation style.
///
/// # Syntax
///
/// ```text
/// cx! { builder;
///     pattern <= computation;   // Bind
///     let pattern = expression; // Pure let binding
///     yield expression;         // Record a value (CombineBuilder only)
///     return expression         // Terminal: pure(expression)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "state")] {
/// use compexpr::cx;
/// use compexpr::effect::{State, StateBuilder};
///
/// let builder = StateBuilder::<i32>::new();
/// let computation: State<i32, i32> = cx! { builder;
///     current <= State::get();
///     _ <= State::put(current + 1);
///     next <= State::get();
///     return next * 2
/// };
/// assert_eq!(computation.run(20), (42, 21));
/// # }
/// ```
///
/// `yield` on a builder without a merge is rejected at compile time:
///
#[cfg_attr(feature = "option", doc = "```compile_fail")]
#[cfg_attr(not(feature = "option"), doc = "```ignore")]
/// use compexpr::cx;
/// use compexpr::effect::OptionBuilder;
///
/// let builder = OptionBuilder;
/// let result = cx! { builder;
///     x <= Some(1);
///     yield x;
///     return x
/// };
/// ```
#[macro_export]
macro_rules! cx {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    ($builder:ident ; return $result:expr) => {
        $crate::builder::ExpressionBuilder::pure(&$builder, $result)
    };

    ($builder:ident ; yield $result:expr) => {
        $crate::builder::ExpressionBuilder::pure(&$builder, $result)
    };

    // ==========================================================================
    // Yield: record a value and continue
    // ==========================================================================

    ($builder:ident ; yield $value:expr ; $($rest:tt)+) => {{
        let recorded = $crate::builder::ExpressionBuilder::pure(&$builder, $value);
        $crate::builder::CombineBuilder::concat(&$builder, recorded, $crate::cx!($builder ; $($rest)+))
    }};

    // ==========================================================================
    // Bind operation: pattern <= computation; rest
    // ==========================================================================

    ($builder:ident ; _ <= $computation:expr ; $($rest:tt)+) => {{
        let continuation_builder = ::core::clone::Clone::clone(&$builder);
        $crate::builder::ExpressionBuilder::bind(&$builder, $computation, move |_| {
            let $builder = ::core::clone::Clone::clone(&continuation_builder);
            $crate::cx!($builder ; $($rest)+)
        })
    }};

    ($builder:ident ; $pattern:ident <= $computation:expr ; $($rest:tt)+) => {{
        let continuation_builder = ::core::clone::Clone::clone(&$builder);
        $crate::builder::ExpressionBuilder::bind(&$builder, $computation, move |$pattern| {
            let $builder = ::core::clone::Clone::clone(&continuation_builder);
            $crate::cx!($builder ; $($rest)+)
        })
    }};

    ($builder:ident ; ($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {{
        let continuation_builder = ::core::clone::Clone::clone(&$builder);
        $crate::builder::ExpressionBuilder::bind(&$builder, $computation, move |($($pattern)*)| {
            let $builder = ::core::clone::Clone::clone(&continuation_builder);
            $crate::cx!($builder ; $($rest)+)
        })
    }};

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    ($builder:ident ; let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::cx!($builder ; $($rest)+)
    }};

    ($builder:ident ; let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::cx!($builder ; $($rest)+)
    }};

    // ==========================================================================
    // Terminal computation, used as-is
    // ==========================================================================

    ($builder:ident ; $result:expr) => {
        $result
    };
}
