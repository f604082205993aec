//! State computations - state threaded through a sequence of steps.
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`, where `S` is the
//! state type and `A` is the result type. The function takes the current
//! state, produces a result, and returns a potentially modified state.
//! Nothing runs until the computation is driven with an initial state.
//!
//! # Laws
//!
//! State satisfies the Monad laws, plus the state-specific laws:
//!
//! - Get Put Law: `get().flat_map(|s| put(s)) == pure(())`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use compexpr::cx;
//! use compexpr::effect::{State, StateBuilder};
//!
//! let builder = StateBuilder::<i32>::new();
//! let computation: State<i32, i32> = cx! { builder;
//!     _ <= State::put(5);
//!     current <= State::get();
//!     return current
//! };
//!
//! assert_eq!(computation.run(0), (5, 5));
//! ```
//!
//! Counter pattern:
//!
//! ```rust
//! use compexpr::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.eval(0), 3);
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::builder::{ExpressionBuilder, Value};

/// A computation that threads a state of type `S` and produces an `A`.
///
/// Cloning a `State` shares the wrapped function.
pub struct State<S, A> {
    /// The wrapped state transition function.
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use compexpr::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with the given initial state.
    ///
    /// Returns both the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result.
    ///
    /// ```rust
    /// use compexpr::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.eval(10), 20);
    /// ```
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the computation and returns only the final state.
    ///
    /// ```rust
    /// use compexpr::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.exec(10), 11);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Creates a State that returns a constant value without modifying the state.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result of this State.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Chains this State with a function that produces another State.
    ///
    /// The state produced by `self` is fed into the State returned by
    /// `function`.
    ///
    /// ```rust
    /// use compexpr::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// // First: (10, 11), then with state 11: (10 + 11, 22)
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            let next_state = function(result);
            next_state.run(intermediate_state)
        })
    }

    /// Sequences two States, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Creates a State that projects a value from the current state.
    ///
    /// ```rust
    /// use compexpr::effect::State;
    ///
    /// let state: State<(u16, String), u16> = State::gets(|(port, _)| *port);
    /// assert_eq!(state.eval((8080, "localhost".to_string())), 8080);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Creates a State that returns the current state without modifying it.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state and returns `()`.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that transforms the current state and returns `()`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("State(<function>)")
    }
}

impl<S: 'static, A: Default + 'static> Default for State<S, A> {
    fn default() -> Self {
        Self::new(|state| (A::default(), state))
    }
}

/// Runs `computation` from `initial_state` and returns only the result.
pub fn eval_state<S: 'static, A: 'static>(computation: &State<S, A>, initial_state: S) -> A {
    computation.eval(initial_state)
}

/// Runs `computation` from `initial_state` and returns only the final state.
pub fn exec_state<S: 'static, A: 'static>(computation: &State<S, A>, initial_state: S) -> S {
    computation.exec(initial_state)
}

/// Builder for `State<S, T>` computations over a fixed state type `S`.
///
/// `zero` leaves the state untouched and returns `T::default()`. `combine`
/// is refused.
pub struct StateBuilder<S> {
    state: PhantomData<fn() -> S>,
}

impl<S> StateBuilder<S> {
    /// Creates a builder for state type `S`.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: PhantomData }
    }
}

impl<S> Default for StateBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for StateBuilder<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for StateBuilder<S> {}

impl<S> fmt::Debug for StateBuilder<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "StateBuilder<{}>", std::any::type_name::<S>())
    }
}

impl<S: Clone + 'static> ExpressionBuilder for StateBuilder<S> {
    const NAME: &'static str = "StateBuilder";

    type Computation<T: Value> = State<S, T>;

    fn bind<U, T, F>(&self, computation: State<S, U>, continuation: F) -> State<S, T>
    where
        U: Value,
        T: Value,
        F: Fn(U) -> State<S, T> + 'static,
    {
        computation.flat_map(continuation)
    }

    fn pure<T: Value>(&self, value: T) -> State<S, T> {
        State::pure(value)
    }

    fn zero<T: Value>(&self) -> State<S, T> {
        State::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_state() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(format!("{state}"), "<State>");
    }

    #[rstest]
    fn state_get_returns_current_state() {
        let state: State<i32, i32> = State::get();
        assert_eq!(state.run(42), (42, 42));
    }

    #[rstest]
    fn state_put_replaces_state() {
        let state: State<i32, ()> = State::put(100);
        let ((), final_state) = state.run(42);
        assert_eq!(final_state, 100);
    }

    #[rstest]
    fn state_modify_transforms_state() {
        let state: State<i32, ()> = State::modify(|x| x * 2);
        assert_eq!(state.exec(21), 42);
    }

    #[rstest]
    fn state_fmap_transforms_result() {
        let state: State<i32, i32> = State::new(|s: i32| (s, s));
        assert_eq!(state.fmap(|value| value * 2).run(21), (42, 21));
    }

    #[rstest]
    fn builder_zero_keeps_state() {
        let builder = StateBuilder::<i32>::new();
        let zero: State<i32, String> = builder.zero();
        assert_eq!(zero.run(7), (String::new(), 7));
    }

    #[rstest]
    fn builder_combine_is_unsupported() {
        let builder = StateBuilder::<i32>::new();
        let error = builder
            .combine(State::pure(1), State::pure(2))
            .unwrap_err();
        assert_eq!(error.builder, "StateBuilder");
    }

    #[rstest]
    fn builder_debug_names_state_type() {
        assert_eq!(format!("{:?}", StateBuilder::<i32>::new()), "StateBuilder<i32>");
    }

    #[rstest]
    fn free_drivers_match_methods() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(eval_state(&state, 10), 20);
        assert_eq!(exec_state(&state, 10), 11);
    }

    #[rstest]
    fn state_clone_shares_function() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let cloned = state.clone();
        assert_eq!(state.run(10), cloned.run(10));
    }
}
