//! Compilation of clause ASTs into goals.
//!
//! `Relations` is the registry of defined relations. Definitions and
//! queries are validated statically: unknown relations, arity mismatches
//! and unbound variable tokens are reported before any search starts.
//! Compilation itself cannot fail on validated input.

use crate::clause::ast::{GoalExpr, TermExpr};
use crate::clause::ClauseError;
use crate::core::goal::{Goal, RawGoal};
use crate::core::stream::Stream;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use crate::core::var::Var;
use crate::goals::combinators::{conj2, disj2};
use crate::goals::primitive::{eq, fail, succeed};
use std::sync::Arc;

/// A compiled, heap-allocated goal.
pub type DynGoal = Arc<dyn RawGoal<Substitution>>;

type Defs = im::HashMap<String, Arc<RelDef>>;
type Scope = im::HashMap<String, Term>;

#[derive(Debug)]
struct RelDef {
    params: Vec<String>,
    body: Vec<GoalExpr>,
}

/// Registry of user-defined relations.
///
/// The backing map is persistent, so compiled goals capture an O(1)
/// snapshot of the registry as of compile time.
#[derive(Debug, Clone, Default)]
pub struct Relations {
    defs: Defs,
}

impl Relations {
    pub fn new() -> Self {
        Relations::default()
    }

    /// Define a relation.
    ///
    /// The body is an implicit conjunction over the parameters' scope. The
    /// definition is validated immediately; the relation may call itself.
    /// Relations it calls must already be defined.
    pub fn define<S: Into<String>>(
        &mut self,
        name: &str,
        params: impl IntoIterator<Item = S>,
        body: Vec<GoalExpr>,
    ) -> Result<(), ClauseError> {
        check_ident(name)?;
        if self.defs.contains_key(name) {
            return Err(ClauseError::DuplicateRelation(name.to_string()));
        }

        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        let mut scope = im::HashSet::new();
        for p in &params {
            check_ident(p)?;
            if scope.insert(p.clone()).is_some() {
                return Err(ClauseError::DuplicateParam {
                    relation: name.to_string(),
                    param: p.clone(),
                });
            }
        }

        // Register before validating so the body can call the relation
        // being defined.
        let arity = params.len();
        self.defs.insert(
            name.to_string(),
            Arc::new(RelDef {
                params,
                body: body.clone(),
            }),
        );
        for g in &body {
            if let Err(e) = self.validate_goal(&scope, g) {
                self.defs.remove(name);
                return Err(e);
            }
        }

        log::debug!("defined relation {}/{}", name, arity);
        Ok(())
    }

    /// Compile a closed goal (one with no free variable tokens).
    pub fn goal(&self, body: &[GoalExpr]) -> Result<DynGoal, ClauseError> {
        let scope = im::HashSet::new();
        for g in body {
            self.validate_goal(&scope, g)?;
        }
        Ok(compile_goals(&self.defs, &Scope::new(), body))
    }

    /// Run a query: allocate fresh variables for `query`, solve the body
    /// against the empty substitution and reify up to `n` answers.
    ///
    /// `n = None` is the unbounded form. A single-name query reifies that
    /// variable; a multi-name query reifies the list of variables.
    pub fn run(
        &self,
        n: Option<usize>,
        query: &[&str],
        body: &[GoalExpr],
    ) -> Result<Vec<Term>, ClauseError> {
        let mut scope = im::HashSet::new();
        for q in query {
            check_ident(q)?;
            if scope.insert(q.to_string()).is_some() {
                return Err(ClauseError::DuplicateQueryVar(q.to_string()));
            }
        }
        for g in body {
            self.validate_goal(&scope, g)?;
        }

        let qvars: Vec<Var> = query.iter().map(|name| Var::new(*name)).collect();
        let env: Scope = query
            .iter()
            .zip(&qvars)
            .map(|(name, var)| (name.to_string(), Term::var(var.clone())))
            .collect();
        let qterm = match &qvars[..] {
            [q] => Term::var(q.clone()),
            _ => Term::list(qvars.iter().map(Term::from)),
        };

        log::trace!("run {:?} for query {:?}", n, query);
        let goal = compile_goals(&self.defs, &env, body);
        let answers = goal
            .apply(Substitution::empty())
            .take(n)
            .into_iter()
            .map(|s| s.reify(&qterm))
            .collect();
        Ok(answers)
    }

    fn validate_goal(
        &self,
        scope: &im::HashSet<String>,
        g: &GoalExpr,
    ) -> Result<(), ClauseError> {
        match g {
            GoalExpr::Succeed | GoalExpr::Fail => Ok(()),
            GoalExpr::Eq(u, v) => {
                self.validate_term(scope, u)?;
                self.validate_term(scope, v)
            }
            GoalExpr::Conj(goals) | GoalExpr::Disj(goals) => {
                goals.iter().try_for_each(|g| self.validate_goal(scope, g))
            }
            GoalExpr::Fresh(vars, body) => {
                let scope = extended_scope(scope, vars)?;
                body.iter().try_for_each(|g| self.validate_goal(&scope, g))
            }
            GoalExpr::Conde(lines) => lines.iter().try_for_each(|line| {
                let scope = extended_scope(scope, line.pattern.names())?;
                line.body
                    .iter()
                    .try_for_each(|g| self.validate_goal(&scope, g))
            }),
            GoalExpr::Call(name, args) => {
                let def = self
                    .defs
                    .get(name)
                    .ok_or_else(|| ClauseError::UnknownRelation(name.clone()))?;
                if def.params.len() != args.len() {
                    return Err(ClauseError::ArityMismatch {
                        relation: name.clone(),
                        expected: def.params.len(),
                        got: args.len(),
                    });
                }
                args.iter().try_for_each(|a| self.validate_term(scope, a))
            }
        }
    }

    fn validate_term(&self, scope: &im::HashSet<String>, t: &TermExpr) -> Result<(), ClauseError> {
        match t {
            TermExpr::Var(name) => {
                if scope.contains(name) {
                    Ok(())
                } else {
                    Err(ClauseError::UnboundVar(name.clone()))
                }
            }
            TermExpr::Atom(_) => Ok(()),
            TermExpr::List(items) => {
                items.iter().try_for_each(|t| self.validate_term(scope, t))
            }
            TermExpr::ListWithTail(items, tail) => {
                items.iter().try_for_each(|t| self.validate_term(scope, t))?;
                self.validate_term(scope, tail)
            }
        }
    }
}

/// Add the non-wildcard names of a binding list to a validation scope.
fn extended_scope(
    scope: &im::HashSet<String>,
    names: &[String],
) -> Result<im::HashSet<String>, ClauseError> {
    let mut scope = scope.clone();
    for name in names {
        if name == "_" {
            continue;
        }
        check_ident(name)?;
        scope.insert(name.clone());
    }
    Ok(scope)
}

fn check_ident(name: &str) -> Result<(), ClauseError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ClauseError::InvalidIdent(name.to_string()))
    }
}

/// Box a statically-typed goal.
fn shared(g: impl 'static + Goal<Substitution>) -> DynGoal {
    Arc::new(move |s| g.apply(s))
}

/// Compile an implicit conjunction, folding left-associatively.
fn compile_goals(defs: &Defs, env: &Scope, goals: &[GoalExpr]) -> DynGoal {
    goals
        .iter()
        .map(|g| compile_goal(defs, env, g))
        .reduce(|acc, g| shared(conj2(acc, g)))
        .unwrap_or_else(|| shared(succeed()))
}

fn compile_goal(defs: &Defs, env: &Scope, g: &GoalExpr) -> DynGoal {
    match g {
        GoalExpr::Succeed => shared(succeed()),
        GoalExpr::Fail => shared(fail()),
        GoalExpr::Eq(u, v) => shared(eq(resolve(env, u), resolve(env, v))),
        GoalExpr::Conj(goals) => compile_goals(defs, env, goals),
        GoalExpr::Disj(goals) => goals
            .iter()
            .map(|g| compile_goal(defs, env, g))
            .reduce(|acc, g| shared(disj2(acc, g)))
            .unwrap_or_else(|| shared(fail())),
        GoalExpr::Fresh(vars, body) => {
            let env = bind_fresh(env, vars);
            compile_goals(defs, &env, body)
        }
        GoalExpr::Conde(lines) => lines
            .iter()
            .map(|line| {
                let env = bind_fresh(env, line.pattern.names());
                compile_goals(defs, &env, &line.body)
            })
            .reduce(|acc, g| shared(disj2(acc, g)))
            .unwrap_or_else(|| shared(fail())),
        GoalExpr::Call(name, args) => {
            // Present by validation; defines cannot be retracted.
            let def = defs
                .get(name)
                .cloned()
                .expect("relation resolved during validation");
            let args: Vec<Term> = args.iter().map(|a| resolve(env, a)).collect();
            let defs = defs.clone();
            Arc::new(move |s: Substitution| {
                let def = def.clone();
                let args = args.clone();
                let defs = defs.clone();
                // One-step delay: the body is compiled and entered only
                // when the stream is forced, so recursive relations do not
                // unfold at construction time.
                Stream::suspension(move || {
                    let env: Scope = def
                        .params
                        .iter()
                        .cloned()
                        .zip(args)
                        .collect();
                    compile_goals(&defs, &env, &def.body).apply(s)
                })
            })
        }
    }
}

/// Allocate one fresh variable per non-wildcard name, in order.
fn bind_fresh(env: &Scope, names: &[String]) -> Scope {
    let mut env = env.clone();
    for name in names {
        if name == "_" {
            continue;
        }
        env.insert(name.clone(), Term::var(Var::new(name.as_str())));
    }
    env
}

fn resolve(env: &Scope, t: &TermExpr) -> Term {
    match t {
        // Scope-checked during validation.
        TermExpr::Var(name) => env
            .get(name)
            .cloned()
            .expect("variable token resolved during validation"),
        TermExpr::Atom(a) => Term::Atom(a.clone()),
        TermExpr::List(items) => Term::list(items.iter().map(|t| resolve(env, t))),
        TermExpr::ListWithTail(items, tail) => {
            let mut term = resolve(env, tail);
            for item in items.iter().rev() {
                term = Term::cons(resolve(env, item), term);
            }
            term
        }
    }
}
