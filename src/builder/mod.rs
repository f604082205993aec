//! Expression builders - the operations behind a computation expression.
//!
//! A computation expression is a block of sequential steps whose meaning is
//! decided by a *builder*. The builder supplies four operations:
//!
//! - [`ExpressionBuilder::bind`]: run a computation and feed its value to a
//!   continuation producing the next computation
//! - [`ExpressionBuilder::pure`]: lift a bare value into the effect
//! - [`ExpressionBuilder::zero`]: the effect's empty computation
//! - [`ExpressionBuilder::combine`]: merge two computations of the same type
//!
//! Builders are ordinary values that are passed explicitly. There is no
//! ambient "current builder": every sequencing call receives the builder it
//! works with, and dispatch is resolved statically through the trait.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Each builder names the computation type it produces through the generic
//! associated type [`ExpressionBuilder::Computation`]. `OptionBuilder` maps
//! `T` to `Option<T>`, `SequenceBuilder` maps `T` to `Sequence<T>`, and so on.
//! Because the associated type is fixed per builder, a `bind` on an `Option`
//! can only ever yield another `Option`.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "option")] {
//! use compexpr::builder::ExpressionBuilder;
//! use compexpr::effect::OptionBuilder;
//!
//! fn try_divide(numerator: i32, denominator: i32) -> Option<i32> {
//!     (denominator != 0).then(|| numerator / denominator)
//! }
//!
//! let builder = OptionBuilder;
//! let result = builder.bind(try_divide(120, 2), move |half| {
//!     builder.bind(try_divide(half, 3), move |third| builder.pure(third + 1))
//! });
//! assert_eq!(result, Some(21));
//! # }
//! ```

mod cx_macro;
mod error;
mod sequencer;

pub use error::UnsupportedOperation;
pub use sequencer::{Sequencer, Step};

/// Values that can be carried by a computation.
///
/// `Default` provides the value used by `zero`, by `State::put`-style steps
/// and by cancelled runs. `Clone` lets staged computations be run more than
/// once.
pub trait Value: Clone + Default + 'static {}

impl<T: Clone + Default + 'static> Value for T {}

/// The monad operations capability of a computation expression.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// builder.bind(builder.pure(a), f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// builder.bind(m, |x| builder.pure(x)) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// builder.bind(builder.bind(m, f), g) == builder.bind(m, |x| builder.bind(f(x), g))
/// ```
///
/// "Equal" means observably equal once the computation is driven: compared
/// directly for `Option` and `Sequence`, compared after `run` for `State`
/// and `Cancellable`.
pub trait ExpressionBuilder: Clone + 'static {
    /// Name of the builder, used in diagnostics.
    const NAME: &'static str;

    /// The computation type this builder sequences, applied to `T`.
    type Computation<T: Value>;

    /// Sequences `computation` and then `continuation` applied to its value.
    ///
    /// The continuation is `Fn` because some effects call it more than once
    /// (`Sequence` calls it per element, `State` and `Cancellable` per run).
    fn bind<U, T, F>(&self, computation: Self::Computation<U>, continuation: F) -> Self::Computation<T>
    where
        U: Value,
        T: Value,
        F: Fn(U) -> Self::Computation<T> + 'static;

    /// Lifts a bare value into the effect without any additional effect.
    fn pure<T: Value>(&self, value: T) -> Self::Computation<T>;

    /// The effect's empty or identity computation.
    fn zero<T: Value>(&self) -> Self::Computation<T>;

    /// Merges two computations of the same effect and value type.
    ///
    /// Only builders with a natural merge override this. The default refuses
    /// with [`UnsupportedOperation`].
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperation`] when the builder has no merge.
    fn combine<T: Value>(
        &self,
        first: Self::Computation<T>,
        second: Self::Computation<T>,
    ) -> Result<Self::Computation<T>, UnsupportedOperation> {
        let _ = (first, second);
        tracing::debug!(
            builder = Self::NAME,
            operation = "combine",
            "refusing unsupported operation"
        );
        Err(UnsupportedOperation::new(Self::NAME, "combine"))
    }

    /// Evaluates `body` with this builder.
    ///
    /// This is the explicit replacement for an ambient builder: the body
    /// receives the builder it must sequence with.
    ///
    /// ```rust
    /// # #[cfg(feature = "option")] {
    /// use compexpr::builder::ExpressionBuilder;
    /// use compexpr::effect::OptionBuilder;
    ///
    /// let result = OptionBuilder.run(|builder| {
    ///     let inner = builder.run(|inner_builder| inner_builder.pure(42));
    ///     builder.bind(inner, |value| Some(value + 1))
    /// });
    /// assert_eq!(result, Some(43));
    /// # }
    /// ```
    fn run<T, F>(&self, body: F) -> Self::Computation<T>
    where
        T: Value,
        F: FnOnce(&Self) -> Self::Computation<T>,
    {
        body(self)
    }

    /// Maps a pure function over the value of a computation.
    fn map<U, T, F>(&self, computation: Self::Computation<U>, function: F) -> Self::Computation<T>
    where
        U: Value,
        T: Value,
        F: Fn(U) -> T + 'static,
    {
        let builder = self.clone();
        self.bind(computation, move |value| builder.pure(function(value)))
    }

    /// Sequences two computations, discarding the value of the first.
    fn then<U, T>(&self, first: Self::Computation<U>, second: Self::Computation<T>) -> Self::Computation<T>
    where
        U: Value,
        T: Value,
        Self::Computation<T>: Clone + 'static,
    {
        self.bind(first, move |_| second.clone())
    }
}

/// Builders whose computations can always be merged.
///
/// This is the static counterpart of [`ExpressionBuilder::combine`]: code
/// that needs to merge (`yield` in [`Sequencer`] and [`cx!`](crate::cx!))
/// requires this trait, so a builder without a merge is rejected at compile
/// time rather than at run time.
pub trait CombineBuilder: ExpressionBuilder {
    /// Concatenates two computations, `first` before `second`.
    fn concat<T: Value>(&self, first: Self::Computation<T>, second: Self::Computation<T>) -> Self::Computation<T>;

    /// Records `value` in front of `rest`.
    fn yield_value<T: Value>(&self, value: T, rest: Self::Computation<T>) -> Self::Computation<T> {
        self.concat(self.pure(value), rest)
    }
}
