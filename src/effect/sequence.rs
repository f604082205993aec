//! Sequence computations - nondeterminism.
//!
//! A `Sequence<T>` is an ordered collection of possible values. Binding a
//! sequence runs the continuation for every element and concatenates the
//! results, so chained binds expand into a Cartesian product, outer elements
//! before inner ones.
//!
//! Sequence is the only effect in this crate with a natural merge: `combine`
//! concatenates, which is what gives `yield` its meaning.
//!
//! # Examples
//!
//! ```rust
//! use compexpr::cx;
//! use compexpr::effect::{Sequence, SequenceBuilder};
//!
//! let builder = SequenceBuilder;
//! let pairs = cx! { builder;
//!     x <= Sequence::from_list(vec![1, 2]);
//!     y <= Sequence::from_list(vec!['a', 'b']);
//!     return (x, y)
//! };
//! assert_eq!(pairs.into_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

#![forbid(unsafe_code)]

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::builder::{CombineBuilder, ExpressionBuilder, UnsupportedOperation, Value};

/// An ordered collection of values produced by a nondeterministic computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a sequence from a list of values, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use compexpr::effect::Sequence;
    ///
    /// let sequence = Sequence::from_list(vec![1, 2, 3]);
    /// assert_eq!(sequence.len(), 3);
    /// ```
    #[must_use]
    pub const fn from_list(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Creates an empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a sequence holding exactly one value.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Returns the number of values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the values as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Copies the values into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Consumes the sequence and returns its values.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Appends `other` after the values of `self`.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }

    /// Runs `function` for every value and concatenates the results.
    pub fn flat_map<B, F>(self, mut function: F) -> Sequence<B>
    where
        F: FnMut(T) -> Sequence<B>,
    {
        Sequence {
            elements: self
                .elements
                .into_iter()
                .flat_map(|element| function(element).elements)
                .collect(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_list(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_list(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Sequence[")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

/// Builder for `Sequence<T>` computations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SequenceBuilder;

impl ExpressionBuilder for SequenceBuilder {
    const NAME: &'static str = "SequenceBuilder";

    type Computation<T: Value> = Sequence<T>;

    fn bind<U, T, F>(&self, computation: Sequence<U>, continuation: F) -> Sequence<T>
    where
        U: Value,
        T: Value,
        F: Fn(U) -> Sequence<T> + 'static,
    {
        computation.flat_map(continuation)
    }

    fn pure<T: Value>(&self, value: T) -> Sequence<T> {
        Sequence::singleton(value)
    }

    fn zero<T: Value>(&self) -> Sequence<T> {
        Sequence::empty()
    }

    fn combine<T: Value>(
        &self,
        first: Sequence<T>,
        second: Sequence<T>,
    ) -> Result<Sequence<T>, UnsupportedOperation> {
        Ok(self.concat(first, second))
    }
}

impl CombineBuilder for SequenceBuilder {
    fn concat<T: Value>(&self, first: Sequence<T>, second: Sequence<T>) -> Sequence<T> {
        first.concat(second)
    }
}
