//! Cancellable computations - checkpoint-based cooperative cancellation.
//!
//! A `Cancellable<T>` is a staged computation that receives a
//! [`CancellationSignal`] only when it is run, and returns its value together
//! with a flag telling whether cancellation was observed.
//!
//! Cancellation is observed only at bind boundaries. Binding `m` to a
//! continuation `f` checks the signal:
//!
//! 1. before running `m` - if cancelled, neither `m` nor `f` runs and the
//!    result is `(T::default(), true)`;
//! 2. after `m` - if `m` itself reports cancellation, its value is carried
//!    forward and `f` is not invoked;
//! 3. before invoking `f` - if cancelled, `m`'s value is carried forward;
//! 4. before running the computation returned by `f` - if `f` requested
//!    cancellation, that computation never runs.
//!
//! The carried value is `m`'s own value when it has the result type, and
//! `T::default()` otherwise. Code already running inside a step is never
//! preempted.
//!
//! # Examples
//!
//! ```rust
//! use compexpr::cx;
//! use compexpr::effect::{Cancellable, CancellableBuilder, CancellationSource};
//!
//! let builder = CancellableBuilder;
//! let computation: Cancellable<i32> = cx! { builder;
//!     op <= Cancellable::from_value(1);
//!     op <= Cancellable::maybe_do(move || op + 1);
//!     op <= Cancellable::maybe_do(move || op + 10);
//!     return op
//! };
//!
//! assert_eq!(computation.run_uncancelled(), (12, false));
//!
//! let source = CancellationSource::new();
//! source.cancel();
//! assert_eq!(computation.run(&source.token()), (0, true));
//! ```

#![forbid(unsafe_code)]

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::cancellation::{CancellationSignal, NeverCancelled};
use crate::builder::{ExpressionBuilder, Value};

type RunFunction<T> = Rc<dyn Fn(&dyn CancellationSignal) -> (T, bool)>;

/// A computation gated by a cancellation signal supplied at run time.
pub struct Cancellable<T> {
    run_function: RunFunction<T>,
}

impl<T: 'static> Cancellable<T> {
    /// Creates a computation from a function of the cancellation signal.
    ///
    /// The function returns the value and whether it observed cancellation.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&dyn CancellationSignal) -> (T, bool) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Creates a computation that returns `value` and is never cancelled.
    pub fn from_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |_| (value.clone(), false))
    }

    /// Creates a computation that evaluates `thunk` each time it is run.
    ///
    /// The step itself never reports cancellation; the surrounding binds
    /// decide whether it runs at all.
    ///
    /// ```rust
    /// use compexpr::effect::Cancellable;
    ///
    /// let step = Cancellable::maybe_do(|| 6 * 7);
    /// assert_eq!(step.run_uncancelled(), (42, false));
    /// ```
    pub fn maybe_do<F>(thunk: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self::new(move |_| (thunk(), false))
    }

    /// Runs the computation, polling `signal` at every checkpoint.
    ///
    /// Returns the value and whether cancellation was observed.
    pub fn run(&self, signal: &dyn CancellationSignal) -> (T, bool) {
        (self.run_function)(signal)
    }

    /// Runs the computation with a signal that is never cancelled.
    pub fn run_uncancelled(&self) -> (T, bool) {
        self.run(&NeverCancelled)
    }

    /// Chains this computation with a continuation, checking the signal at
    /// each bind boundary.
    pub fn flat_map<B, F>(self, function: F) -> Cancellable<B>
    where
        T: Clone,
        B: Default + 'static,
        F: Fn(T) -> Cancellable<B> + 'static,
    {
        let previous = self.run_function;
        Cancellable::new(move |signal| {
            if signal.is_cancellation_requested() {
                tracing::trace!(checkpoint = "before_bind", "cancellation observed");
                return (B::default(), true);
            }

            let (result, cancelled) = previous(signal);
            if cancelled {
                tracing::trace!(checkpoint = "inner", "cancellation observed");
                return (carry(result), true);
            }

            if signal.is_cancellation_requested() {
                tracing::trace!(checkpoint = "before_continuation", "cancellation observed");
                return (carry(result), true);
            }

            let next = function(result.clone());
            if signal.is_cancellation_requested() {
                tracing::trace!(checkpoint = "before_next", "cancellation observed");
                return (carry(result), true);
            }

            next.run(signal)
        })
    }
}

/// Converts the last known value into the result type, if it has that type.
fn carry<U: 'static, T: Default + 'static>(value: U) -> T {
    let mut slot = Some(value);
    (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<T>>()
        .and_then(Option::take)
        .unwrap_or_default()
}

impl<T> Clone for Cancellable<T> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<T> fmt::Display for Cancellable<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Cancellable>")
    }
}

impl<T> fmt::Debug for Cancellable<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Cancellable(<function>)")
    }
}

/// Builder for `Cancellable<T>` computations.
///
/// `zero` is a never-cancelled `T::default()`; it does not consult the
/// signal. `combine` is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CancellableBuilder;

impl ExpressionBuilder for CancellableBuilder {
    const NAME: &'static str = "CancellableBuilder";

    type Computation<T: Value> = Cancellable<T>;

    fn bind<U, T, F>(&self, computation: Cancellable<U>, continuation: F) -> Cancellable<T>
    where
        U: Value,
        T: Value,
        F: Fn(U) -> Cancellable<T> + 'static,
    {
        computation.flat_map(continuation)
    }

    fn pure<T: Value>(&self, value: T) -> Cancellable<T> {
        Cancellable::from_value(value)
    }

    fn zero<T: Value>(&self) -> Cancellable<T> {
        Cancellable::from_value(T::default())
    }
}
