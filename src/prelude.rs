pub use crate::{
    clause::{
        ast::{
            atom_, call_, conde_, conj_, cons_, disj_, eq_, fail_, fresh_, list_, nil_,
            succeed_, var_, CondeLine, GoalExpr, Pattern, TermExpr,
        },
        ClauseError, Relations,
    },
    core::{
        goal::{run_goal, Goal, RawGoal},
        stream::Stream,
        substitution::Substitution,
        term::{Atom, Term},
        var::Var,
    },
    goals::{combinators::*, list::*, primitive::*},
};
