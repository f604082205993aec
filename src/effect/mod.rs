//! Effect instances for computation expressions.
//!
//! Each effect pairs a computation type with a builder implementing
//! [`ExpressionBuilder`](crate::builder::ExpressionBuilder):
//!
//! | Builder | Computation | `zero` | `combine` |
//! |---------|-------------|--------|-----------|
//! | [`OptionBuilder`] | `Option<T>` | `None` | unsupported |
//! | [`SequenceBuilder`] | [`Sequence<T>`] | empty | concatenation |
//! | [`StateBuilder<S>`] | [`State<S, T>`] | default value, state unchanged | unsupported |
//! | [`CancellableBuilder`] | [`Cancellable<T>`] | default value, never cancelled | unsupported |
//!
//! Option and Sequence are evaluated eagerly. State and Cancellable are
//! staged: nothing runs until they are driven with an initial state or a
//! cancellation signal.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "sequence")] {
//! use compexpr::cx;
//! use compexpr::effect::{Sequence, SequenceBuilder};
//!
//! let builder = SequenceBuilder;
//! let result = cx! { builder;
//!     item <= Sequence::from_list(vec![1, 2, 3]);
//!     item2 <= Sequence::from_list(vec![100, 200]);
//!     yield item;
//!     yield item2;
//!     return item * item2
//! };
//!
//! assert_eq!(
//!     result.into_vec(),
//!     vec![
//!         1, 100, 100, 1, 200, 200,
//!         2, 100, 200, 2, 200, 400,
//!         3, 100, 300, 3, 200, 600,
//!     ]
//! );
//! # }
//! ```

#[cfg(feature = "cancellable")]
mod cancellable;
#[cfg(feature = "cancellable")]
mod cancellation;
#[cfg(feature = "option")]
mod option;
#[cfg(feature = "sequence")]
mod sequence;
#[cfg(feature = "state")]
mod state;

#[cfg(feature = "cancellable")]
pub use cancellable::{Cancellable, CancellableBuilder};
#[cfg(feature = "cancellable")]
pub use cancellation::{CancellationSignal, CancellationSource, CancellationToken, NeverCancelled};
#[cfg(feature = "option")]
pub use option::{OptionBuilder, none, some};
#[cfg(feature = "sequence")]
pub use sequence::{Sequence, SequenceBuilder};
#[cfg(feature = "state")]
pub use state::{State, StateBuilder, eval_state, exec_state};
