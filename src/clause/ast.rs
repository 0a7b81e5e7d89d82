//! The clause AST.
//!
//! Clauses are plain data: term expressions reference variables by token
//! name, and goal expressions mirror the block forms of the surface
//! language. The constructor functions below are the intended way to build
//! clauses; the compiler in [`super::compile`] turns them into goals.

use crate::core::term::Atom;

/// A term position inside a clause. Variables are identified by token name
/// and resolved against the enclosing scope at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum TermExpr {
    /// A variable token introduced by `fresh`, a `conde` pattern, a
    /// relation parameter, or a query.
    Var(String),
    /// A ground atom.
    Atom(Atom),
    /// A proper list of sub-terms.
    List(Vec<TermExpr>),
    /// A list with an explicit tail: `[a, b | tail]`.
    ListWithTail(Vec<TermExpr>, Box<TermExpr>),
}

/// A goal position inside a clause.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalExpr {
    Succeed,
    Fail,
    /// Unification of two term expressions.
    Eq(TermExpr, TermExpr),
    /// Conjunction; empty means `succeed`.
    Conj(Vec<GoalExpr>),
    /// Disjunction; empty means `fail`.
    Disj(Vec<GoalExpr>),
    /// Scoped fresh variables over an implicit conjunction. The token `_`
    /// contributes no binding.
    Fresh(Vec<String>, Vec<GoalExpr>),
    /// Disjunction of pattern-scoped lines.
    Conde(Vec<CondeLine>),
    /// Invocation of a defined relation.
    Call(String, Vec<TermExpr>),
}

/// The variable pattern of a `conde` line.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// No fresh variables.
    Any,
    /// One fresh variable per name.
    Vars(Vec<String>),
}

impl Pattern {
    pub fn any() -> Self {
        Pattern::Any
    }

    pub fn vars<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Pattern::Vars(names.into_iter().map(Into::into).collect())
    }

    pub(crate) fn names(&self) -> &[String] {
        match self {
            Pattern::Any => &[],
            Pattern::Vars(names) => names,
        }
    }
}

/// One line of a `conde`: a pattern and an implicit conjunction.
#[derive(Debug, Clone, PartialEq)]
pub struct CondeLine {
    pub pattern: Pattern,
    pub body: Vec<GoalExpr>,
}

/// A variable token.
pub fn var_(name: impl Into<String>) -> TermExpr {
    TermExpr::Var(name.into())
}

/// A ground atom.
pub fn atom_(a: impl Into<Atom>) -> TermExpr {
    TermExpr::Atom(a.into())
}

/// The empty list.
pub fn nil_() -> TermExpr {
    TermExpr::Atom(Atom::Nil)
}

/// A proper list.
pub fn list_(items: impl IntoIterator<Item = TermExpr>) -> TermExpr {
    TermExpr::List(items.into_iter().collect())
}

/// A cons cell: `[head | tail]`.
pub fn cons_(head: TermExpr, tail: TermExpr) -> TermExpr {
    TermExpr::ListWithTail(vec![head], Box::new(tail))
}

pub fn succeed_() -> GoalExpr {
    GoalExpr::Succeed
}

pub fn fail_() -> GoalExpr {
    GoalExpr::Fail
}

/// Unification goal.
pub fn eq_(u: TermExpr, v: TermExpr) -> GoalExpr {
    GoalExpr::Eq(u, v)
}

/// Conjunction block.
pub fn conj_(goals: impl IntoIterator<Item = GoalExpr>) -> GoalExpr {
    GoalExpr::Conj(goals.into_iter().collect())
}

/// Disjunction block.
pub fn disj_(goals: impl IntoIterator<Item = GoalExpr>) -> GoalExpr {
    GoalExpr::Disj(goals.into_iter().collect())
}

/// Fresh-variable block over an implicit conjunction.
pub fn fresh_<S: Into<String>>(
    vars: impl IntoIterator<Item = S>,
    body: impl IntoIterator<Item = GoalExpr>,
) -> GoalExpr {
    GoalExpr::Fresh(
        vars.into_iter().map(Into::into).collect(),
        body.into_iter().collect(),
    )
}

/// `conde` block from `(pattern, body)` lines.
pub fn conde_(lines: impl IntoIterator<Item = (Pattern, Vec<GoalExpr>)>) -> GoalExpr {
    GoalExpr::Conde(
        lines
            .into_iter()
            .map(|(pattern, body)| CondeLine { pattern, body })
            .collect(),
    )
}

/// Invocation of a defined relation.
pub fn call_(name: impl Into<String>, args: impl IntoIterator<Item = TermExpr>) -> GoalExpr {
    GoalExpr::Call(name.into(), args.into_iter().collect())
}
