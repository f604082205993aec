//! # compexpr
//!
//! Computation expressions for Rust: a generic builder for monadic
//! do-notation, with Option, Sequence, State and Cancellable instances.
//!
//! ## Overview
//!
//! - **Builders**: [`ExpressionBuilder`](builder::ExpressionBuilder) exposes
//!   `bind`, `pure`, `zero` and `combine` over a builder-specific computation
//!   type. Builders are passed explicitly; dispatch is static.
//! - **Sequencing**: the [`cx!`] macro and the
//!   [`Sequencer`](builder::Sequencer) turn a block of steps into builder
//!   calls.
//! - **Effects**: `Option<T>`, [`Sequence<T>`](effect::Sequence),
//!   [`State<S, T>`](effect::State) and
//!   [`Cancellable<T>`](effect::Cancellable).
//!
//! ## Feature Flags
//!
//! - `option`: the Option instance
//! - `sequence`: the Sequence instance
//! - `state`: the State instance
//! - `cancellable`: the Cancellable instance and cancellation tokens
//! - `serde`: `Serialize`/`Deserialize` for `Sequence<T>`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "option")] {
//! use compexpr::prelude::*;
//!
//! fn try_divide(numerator: i32, denominator: i32) -> Option<i32> {
//!     if denominator == 0 { none() } else { some(numerator / denominator) }
//! }
//!
//! let builder = OptionBuilder;
//! let result = cx! { builder;
//!     half <= try_divide(120, 2);
//!     third <= try_divide(half, 3);
//!     return third
//! };
//! assert_eq!(result, Some(20));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the builder traits, every enabled effect and the [`cx!`]
/// macro.
///
/// ```rust
/// use compexpr::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::*;

    pub use crate::effect::*;

    pub use crate::cx;
}

pub mod builder;

pub mod effect;
