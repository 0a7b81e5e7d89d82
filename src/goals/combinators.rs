//! Compose goals using combinators to build more complex goals

use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::substitution::Substitution;

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Answers from the two subgoals interleave whenever the left stream
/// suspends, so an infinite left branch cannot starve the right one.
pub fn disj2(g1: impl Goal<Substitution>, g2: impl Goal<Substitution>) -> impl Goal<Substitution> {
    move |s: Substitution| Stream::append_inf(g1.apply(s.clone()), g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// Every answer of the first goal drives the second.
pub fn conj2(
    g1: impl Goal<Substitution>,
    g2: impl 'static + Goal<Substitution>,
) -> impl Goal<Substitution> {
    move |s| g1.apply(s).append_map_inf(g2.clone())
}
