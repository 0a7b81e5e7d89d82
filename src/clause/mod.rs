//! The clause compiler: declarative clauses as data.
//!
//! Clauses are ordinary values built from the constructors in [`ast`]
//! (`conj_`, `disj_`, `fresh_`, `conde_`, `call_`, ...). A [`Relations`]
//! registry holds named relation definitions and compiles clause trees
//! into goals. Malformed clauses (unknown relations, wrong arities,
//! unbound variable tokens, invalid identifiers) are rejected when a
//! relation is defined or a query is submitted, never during the search.
//!
//! Search failure is not an error: a goal that cannot be satisfied simply
//! produces an empty stream.

pub mod ast;
pub mod compile;

pub use compile::{DynGoal, Relations};

use thiserror::Error;

/// A malformed clause, reported at clause-compile time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    #[error("unknown relation `{0}`")]
    UnknownRelation(String),

    #[error("relation `{relation}` expects {expected} argument(s), got {got}")]
    ArityMismatch {
        relation: String,
        expected: usize,
        got: usize,
    },

    #[error("variable token `{0}` is not bound by any enclosing scope")]
    UnboundVar(String),

    #[error("`{0}` is not a valid identifier")]
    InvalidIdent(String),

    #[error("relation `{0}` is already defined")]
    DuplicateRelation(String),

    #[error("duplicate parameter `{param}` in relation `{relation}`")]
    DuplicateParam { relation: String, param: String },

    #[error("duplicate query variable `{0}`")]
    DuplicateQueryVar(String),
}
