//! Sequencer - an explicit do-block built from a list of steps.
//!
//! A [`Sequencer`] records an ordered list of [`Step`]s and reduces them
//! left-to-right with the builder's own operations:
//!
//! - [`Sequencer::then`] binds a sub-computation and passes its value forward
//! - [`Sequencer::yield_with`] records a value into the accumulating result
//!
//! Every step works on a single context type `T`. When a block needs several
//! named values at once, the [`cx!`](crate::cx!) macro is usually the more
//! convenient spelling; the sequencer is for blocks assembled at run time.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "sequence")] {
//! use compexpr::builder::Sequencer;
//! use compexpr::effect::{Sequence, SequenceBuilder};
//!
//! let block = Sequencer::new(SequenceBuilder)
//!     .yield_with(|value: &i32| *value)
//!     .then(|value| Sequence::from_list(vec![value * 10, value * 20]));
//!
//! let result = block.build(Sequence::from_list(vec![1, 2]), |value| value + 1);
//! assert_eq!(result.into_vec(), vec![1, 11, 21, 2, 21, 41]);
//! # }
//! ```

use std::fmt;
use std::rc::Rc;

use super::{CombineBuilder, ExpressionBuilder, Value};

type Continuation<B, T> = Rc<dyn Fn(T) -> <B as ExpressionBuilder>::Computation<T>>;

type Merge<B, T> = fn(
    &B,
    <B as ExpressionBuilder>::Computation<T>,
    <B as ExpressionBuilder>::Computation<T>,
) -> <B as ExpressionBuilder>::Computation<T>;

/// A single step of a [`Sequencer`].
pub enum Step<B: ExpressionBuilder, T: Value> {
    /// Bind the computation produced from the current value.
    Bind(Continuation<B, T>),
    /// Record a value derived from the current value, then continue with it.
    Yield {
        /// Derives the recorded value.
        projection: Rc<dyn Fn(&T) -> T>,
        /// The builder's merge, captured where `B: CombineBuilder` is known.
        merge: Merge<B, T>,
    },
}

impl<B: ExpressionBuilder, T: Value> Clone for Step<B, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Bind(continuation) => Self::Bind(Rc::clone(continuation)),
            Self::Yield { projection, merge } => Self::Yield {
                projection: Rc::clone(projection),
                merge: *merge,
            },
        }
    }
}

impl<B: ExpressionBuilder, T: Value> fmt::Debug for Step<B, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(_) => formatter.write_str("Bind"),
            Self::Yield { .. } => formatter.write_str("Yield"),
        }
    }
}

/// An ordered list of steps reduced into one computation.
///
/// Steps are folded right-to-left into a single continuation, so that the
/// resulting computation evaluates them left-to-right.
pub struct Sequencer<B: ExpressionBuilder, T: Value> {
    builder: B,
    steps: Vec<Step<B, T>>,
}

impl<B: ExpressionBuilder, T: Value> Sequencer<B, T> {
    /// Creates an empty sequencer for `builder`.
    #[must_use]
    pub const fn new(builder: B) -> Self {
        Self {
            builder,
            steps: Vec::new(),
        }
    }

    /// Appends a bind step.
    #[must_use]
    pub fn then<F>(mut self, continuation: F) -> Self
    where
        F: Fn(T) -> B::Computation<T> + 'static,
    {
        self.steps.push(Step::Bind(Rc::new(continuation)));
        self
    }

    /// Appends a yield step. Only builders that can merge accept it.
    #[must_use]
    pub fn yield_with<F>(mut self, projection: F) -> Self
    where
        B: CombineBuilder,
        F: Fn(&T) -> T + 'static,
    {
        self.steps.push(Step::Yield {
            projection: Rc::new(projection),
            merge: <B as CombineBuilder>::concat::<T>,
        });
        self
    }

    /// Returns the builder this sequencer reduces with.
    #[must_use]
    pub const fn builder(&self) -> &B {
        &self.builder
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub const fn steps(&self) -> &[Step<B, T>] {
        self.steps.as_slice()
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no steps were recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Reduces the steps into one computation.
    ///
    /// `start` is bound first; each step then runs in order, and the value
    /// reaching the end is lifted with `pure(finish(value))`.
    pub fn build<F>(self, start: B::Computation<T>, finish: F) -> B::Computation<T>
    where
        F: Fn(T) -> T + 'static,
    {
        tracing::trace!(builder = B::NAME, steps = self.steps.len(), "building sequencer");

        let Self { builder, steps } = self;
        let tail_builder = builder.clone();
        let mut continuation: Continuation<B, T> =
            Rc::new(move |value| tail_builder.pure(finish(value)));

        for step in steps.into_iter().rev() {
            let step_builder = builder.clone();
            let next = continuation;
            continuation = match step {
                Step::Bind(bound) => Rc::new(move |value| {
                    let next = Rc::clone(&next);
                    step_builder.bind(bound(value), move |forwarded| next(forwarded))
                }),
                Step::Yield { projection, merge } => Rc::new(move |value| {
                    let recorded = step_builder.pure(projection(&value));
                    merge(&step_builder, recorded, next(value))
                }),
            };
        }

        builder.bind(start, move |value| continuation(value))
    }
}

impl<B: ExpressionBuilder, T: Value> Clone for Sequencer<B, T> {
    fn clone(&self) -> Self {
        Self {
            builder: self.builder.clone(),
            steps: self.steps.clone(),
        }
    }
}

impl<B: ExpressionBuilder, T: Value> fmt::Debug for Sequencer<B, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Sequencer")
            .field("builder", &B::NAME)
            .field("steps", &self.steps)
            .finish()
    }
}

#[cfg(all(test, feature = "option", feature = "sequence"))]
mod tests {
    use super::*;
    use crate::effect::{OptionBuilder, Sequence, SequenceBuilder};
    use rstest::rstest;

    #[rstest]
    fn empty_sequencer_lifts_the_finished_value() {
        let block: Sequencer<OptionBuilder, i32> = Sequencer::new(OptionBuilder);
        assert!(block.is_empty());
        assert_eq!(block.build(Some(4), |value| value * 10), Some(40));
    }

    #[rstest]
    fn bind_steps_run_left_to_right() {
        let block = Sequencer::new(OptionBuilder)
            .then(|value: i32| Some(value + 1))
            .then(|value| Some(value * 10));
        assert_eq!(block.len(), 2);
        assert_eq!(block.build(Some(1), |value| value), Some(20));
    }

    #[rstest]
    fn absent_step_stops_the_block() {
        let block = Sequencer::new(OptionBuilder)
            .then(|_: i32| None)
            .then(|value| Some(value * 10));
        assert_eq!(block.build(Some(1), |value| value), None);
    }

    #[rstest]
    fn yield_records_before_continuing() {
        let block = Sequencer::new(SequenceBuilder)
            .yield_with(|value: &i32| *value)
            .then(|value| Sequence::from_list(vec![value + 1]));
        let result = block.build(Sequence::from_list(vec![1, 5]), |value| value);
        assert_eq!(result.into_vec(), vec![1, 2, 5, 6]);
    }

    #[rstest]
    fn debug_lists_steps() {
        let block = Sequencer::new(SequenceBuilder)
            .yield_with(|value: &i32| *value)
            .then(|value| Sequence::from_list(vec![value]));
        assert_eq!(
            format!("{block:?}"),
            "Sequencer { builder: \"SequenceBuilder\", steps: [Yield, Bind] }"
        );
    }

    #[rstest]
    fn cloned_sequencer_builds_independently() {
        let block = Sequencer::new(OptionBuilder).then(|value: i32| Some(value + 1));
        let cloned = block.clone();
        assert_eq!(block.build(Some(1), |value| value), Some(2));
        assert_eq!(cloned.build(Some(10), |value| value), Some(11));
    }
}
