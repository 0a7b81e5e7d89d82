//! Substitutions map variables to terms.
//!
//! The mapping is triangular: a variable may be bound to another variable,
//! which may be bound in turn. Substitutions are persistent values backed
//! by a HAMT; extending one leaves the original untouched, which is what
//! lets suspended streams keep their view of the search state for free.

use crate::core::term::Term;
use crate::core::var::Var;
use std::fmt::{self, Formatter};

/// Immutable mapping of variables to terms.
#[derive(Clone, PartialEq, Default)]
pub struct Substitution {
    map: im::HashMap<Var, Term>,
}

impl Substitution {
    /// The empty substitution.
    pub fn empty() -> Self {
        Substitution {
            map: im::HashMap::new(),
        }
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up the direct binding of a variable, without walking.
    pub fn get(&self, v: &Var) -> Option<&Term> {
        self.map.get(v)
    }

    /// Resolve a term through the variable chains of this substitution.
    ///
    /// Returns either a non-variable term or a variable that is not bound
    /// here. Bounded by the chain length for substitutions built through
    /// [`Substitution::extend`]; an unchecked cyclic substitution makes
    /// this loop forever.
    pub fn walk<'a>(&'a self, t: &'a Term) -> &'a Term {
        let mut cur = t;
        while let Term::Var(v) = cur {
            match self.map.get(v) {
                Some(next) => cur = next,
                None => break,
            }
        }
        cur
    }

    /// Returns `true` if `x` occurs in `t` under this substitution.
    pub fn occurs(&self, x: &Var, t: &Term) -> bool {
        match self.walk(t) {
            Term::Var(v) => v == x,
            Term::Atom(_) => false,
            Term::Pair(car, cdr) => self.occurs(x, car) || self.occurs(x, cdr),
        }
    }

    /// Bind `x` to `t` without an occurs-check.
    ///
    /// The caller must know the binding cannot close a cycle; `walk` on a
    /// cyclic substitution does not terminate.
    pub fn extend_unchecked(&self, x: Var, t: Term) -> Self {
        Substitution {
            map: self.map.update(x, t),
        }
    }

    /// Bind `x` to `t`, refusing bindings that would close a cycle.
    pub fn extend(&self, x: Var, t: Term) -> Option<Self> {
        if self.occurs(&x, &t) {
            None
        } else {
            Some(self.extend_unchecked(x, t))
        }
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Returns the extended substitution, or `None` if no extension makes
    /// the two terms equal.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        let u = self.walk(u).clone();
        let v = self.walk(v).clone();
        match (u, v) {
            (Term::Var(a), Term::Var(b)) => {
                if a == b {
                    Some(self.clone())
                } else {
                    // Both sides walked to fresh variables; binding one to
                    // the other cannot close a cycle.
                    Some(self.extend_unchecked(a, Term::Var(b)))
                }
            }
            (Term::Var(x), t) | (t, Term::Var(x)) => self.extend(x, t),
            (Term::Atom(a), Term::Atom(b)) => {
                if a == b {
                    Some(self.clone())
                } else {
                    None
                }
            }
            (Term::Pair(ua, ud), Term::Pair(va, vd)) => self.unify(&ua, &va)?.unify(&ud, &vd),
            _ => None,
        }
    }

    /// Resolve every variable reachable in `t`, rebuilding pairs.
    ///
    /// The result contains only ground constructors and variables that are
    /// fresh in this substitution.
    pub fn walk_star(&self, t: &Term) -> Term {
        let t = self.walk(t);
        match t {
            Term::Pair(car, cdr) => Term::cons(self.walk_star(car), self.walk_star(cdr)),
            other => other.clone(),
        }
    }

    /// Bind every fresh variable reachable in `t` to a reified name.
    ///
    /// Traversal is depth-first, head before tail, so names are assigned
    /// in left-to-right reading order.
    pub fn reify_s(&self, t: &Term) -> Self {
        let t = self.walk(t).clone();
        match t {
            Term::Var(v) => {
                let name = format!("_{}", self.len());
                self.extend_unchecked(v, Term::sym(name))
            }
            Term::Pair(car, cdr) => self.reify_s(&car).reify_s(&cdr),
            Term::Atom(_) => self.clone(),
        }
    }

    /// Produce the canonical printable form of `t` under this substitution.
    ///
    /// Fresh variables become `_0`, `_1`, ... in first-encounter order; the
    /// same variable keeps the same name everywhere it appears. The result
    /// contains no variables.
    pub fn reify(&self, t: &Term) -> Term {
        let v = self.walk_star(t);
        let r = Substitution::empty().reify_s(&v);
        r.walk_star(&v)
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.map.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Construct a substitution from `var: term` entries.
#[macro_export]
macro_rules! substitution {
    () => { $crate::core::substitution::Substitution::empty() };

    ($($var:ident : $val:expr),* $(,)?) => {{
        let mut subs = $crate::core::substitution::Substitution::empty();
        $(
            subs = subs.extend_unchecked($var.clone(), $crate::core::term::Term::from($val.clone()));
        )*
        subs
    }}
}
