//! Assertion helpers shared by the test suites.

use crate::core::goal::Goal;
use crate::core::substitution::Substitution;
use crate::core::term::Term;

/// Assert that a goal fails.
pub fn fails(goal: impl Goal<Substitution>) {
    let result = run!(1, q, goal);
    assert!(result.is_empty());
}

/// Assert that a goal succeeds at least once.
pub fn succeeds(goal: impl Goal<Substitution>) {
    let result = run!(1, q, goal);
    assert!(!result.is_empty());
}

/// Assert that an answer iterator yields exactly one expected solution.
pub fn has_unique_solution(mut solutions: impl Iterator<Item = Term>, expected: Term) {
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
