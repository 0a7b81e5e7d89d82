use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::substitution::Substitution;
use crate::core::term::Term;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal<Substitution> + 'static {
    let u: Term = u.into();
    let v: Term = v.into();
    move |s: Substitution| match s.unify(&u, &v) {
        Some(s) => Stream::singleton(s),
        None => Stream::empty(),
    }
}

/// Creates a goal that always succeeds, passing the state through.
pub fn succeed() -> impl Goal<Substitution> {
    |s| Stream::singleton(s)
}

/// Creates a goal that always fails.
pub fn fail() -> impl Goal<Substitution> {
    |_| Stream::empty()
}

/// Creates a goal that never produces an answer but suspends forever.
pub fn nevero() -> impl Goal<Substitution> {
    |s| Stream::suspension(|| nevero().apply(s))
}

/// Creates a goal that succeeds any number of times.
pub fn alwayso() -> impl Goal<Substitution> {
    use crate::goals::combinators::disj2;
    |s| Stream::suspension(|| disj2(succeed(), alwayso()).apply(s))
}
