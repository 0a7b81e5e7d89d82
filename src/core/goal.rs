//! Goals are the building blocks of the engine.
//!
//! A goal applied to a `Substitution` returns a `Stream` of `Substitution`s.
//! If the goal fails the `Stream` is empty. Goals are pure values; composing
//! them never evaluates them.

use crate::core::stream::{Stream, StreamIter};
use crate::core::substitution::Substitution;
use std::sync::Arc;

/// The `Goal` trait. See module-level documentation for more details.
pub trait Goal<T: Default>: Clone {
    /// Apply the goal to a `Substitution`.
    fn apply(&self, s: T) -> Stream<T>;

    /// Run the goal against the empty state. Returns at most `n` values.
    fn run(&self, n: usize) -> Stream<T> {
        self.apply(T::default()).take_inf(n)
    }

    /// Run the goal against the empty state. Returns all values but may
    /// never terminate if the solution stream is infinite.
    fn run_inf(&self) -> Stream<T> {
        self.apply(T::default()).take_inf_all()
    }

    /// Convert the goal into an iterator of values.
    fn iter(&self) -> StreamIter<T> {
        self.apply(T::default()).into_iter()
    }
}

impl<T: Default, G: Clone + Fn(T) -> Stream<T>> Goal<T> for G {
    fn apply(&self, s: T) -> Stream<T> {
        self(s)
    }
}

/// Object-safe companion of [`Goal`].
///
/// Heap-allocated goal trees (such as the ones the clause compiler builds)
/// are `Arc<dyn RawGoal>`, which is `Clone` and therefore a `Goal` again.
pub trait RawGoal<T> {
    fn apply_raw(&self, s: T) -> Stream<T>;
}

impl<T, G: Fn(T) -> Stream<T>> RawGoal<T> for G {
    fn apply_raw(&self, s: T) -> Stream<T> {
        self(s)
    }
}

impl<T: Default> Goal<T> for Arc<dyn RawGoal<T>> {
    fn apply(&self, s: T) -> Stream<T> {
        self.apply_raw(s)
    }
}

/// Apply a goal to the empty substitution and take up to `n` answers;
/// `None` takes every answer the stream produces.
pub fn run_goal(n: Option<usize>, g: impl Goal<Substitution>) -> Stream<Substitution> {
    g.apply(Substitution::empty()).take(n)
}
