//! The object-language values: variables, atoms and cons cells.

use crate::core::var::Var;
use std::fmt::{self, Formatter};
use std::sync::Arc;

/// A term of the object language.
///
/// Terms are immutable; `Pair` children are shared through `Arc`, so
/// cloning a term is cheap.
#[derive(Clone, PartialEq)]
pub enum Term {
    /// A logic variable.
    Var(Var),
    /// An opaque ground value.
    Atom(Atom),
    /// A cons cell. Proper lists are right-nested pairs ending in nil.
    Pair(Arc<Term>, Arc<Term>),
}

/// Ground values the engine treats as atomic.
///
/// Equality is structural. The empty list is an atom of its own.
#[derive(Clone, PartialEq)]
pub enum Atom {
    /// The empty list.
    Nil,
    Bool(bool),
    Int(i64),
    /// A symbol. Reified variable names (`_0`, `_1`, ...) are symbols.
    Sym(Arc<str>),
    /// A string, distinct from any symbol.
    Str(Arc<str>),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    /// The empty list.
    pub fn nil() -> Self {
        Term::Atom(Atom::Nil)
    }

    /// A symbol atom.
    pub fn sym(s: impl Into<Arc<str>>) -> Self {
        Term::Atom(Atom::Sym(s.into()))
    }

    /// A string atom.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Term::Atom(Atom::Str(s.into()))
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    /// Construct a cons cell.
    pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(car.into()), Arc::new(cdr.into()))
    }

    /// Construct a proper list from the given elements.
    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        let items: Vec<Term> = items.into_iter().collect();
        let mut list = Term::nil();
        for item in items.into_iter().rev() {
            list = Term::cons(item, list);
        }
        list
    }

    pub fn try_as_var(&self) -> Option<&Var> {
        match self {
            Term::Var(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Atom(Atom::Nil))
    }
}

impl From<()> for Atom {
    fn from(_: ()) -> Self {
        Atom::Nil
    }
}

impl From<bool> for Atom {
    fn from(b: bool) -> Self {
        Atom::Bool(b)
    }
}

impl From<i64> for Atom {
    fn from(n: i64) -> Self {
        Atom::Int(n)
    }
}

impl From<i32> for Atom {
    fn from(n: i32) -> Self {
        Atom::Int(n as i64)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::Sym(s.into())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::Str(s.into())
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(v.clone())
    }
}

impl From<Atom> for Term {
    fn from(a: Atom) -> Self {
        Term::Atom(a)
    }
}

impl From<()> for Term {
    fn from(_: ()) -> Self {
        Term::nil()
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Atom(Atom::Bool(b))
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Atom(Atom::Int(n))
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::Atom(Atom::Int(n as i64))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::sym(s)
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::string(s)
    }
}

impl<A: Into<Term>, D: Into<Term>> From<(A, D)> for Term {
    fn from((car, cdr): (A, D)) -> Self {
        Term::cons(car, cdr)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::list(items)
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        matches!(self, Term::Var(sv) if sv == v)
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, s: &&str) -> bool {
        matches!(self, Term::Atom(Atom::Sym(sym)) if &**sym == *s)
    }
}

impl PartialEq<i64> for Term {
    fn eq(&self, n: &i64) -> bool {
        matches!(self, Term::Atom(Atom::Int(i)) if i == n)
    }
}

impl PartialEq<i32> for Term {
    fn eq(&self, n: &i32) -> bool {
        matches!(self, Term::Atom(Atom::Int(i)) if *i == *n as i64)
    }
}

impl PartialEq<bool> for Term {
    fn eq(&self, b: &bool) -> bool {
        matches!(self, Term::Atom(Atom::Bool(v)) if v == b)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Atom::Nil => write!(f, "()"),
            Atom::Bool(b) => write!(f, "{}", b),
            Atom::Int(n) => write!(f, "{}", n),
            Atom::Sym(s) => write!(f, "{}", s),
            Atom::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Atom(a) => write!(f, "{:?}", a),
            Term::Pair(car, cdr) => {
                write!(f, "({:?}", car)?;
                let mut tail = cdr;
                loop {
                    match &**tail {
                        Term::Atom(Atom::Nil) => break,
                        Term::Pair(a, d) => {
                            write!(f, " {:?}", a)?;
                            tail = d;
                        }
                        other => {
                            write!(f, " . {:?}", other)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_print_in_parentheses() {
        let l = Term::list(vec![Term::new(1), Term::new(2), Term::new(3)]);
        assert_eq!(format!("{:?}", l), "(1 2 3)");
    }

    #[test]
    fn improper_pairs_print_with_dot() {
        let p = Term::cons(1, 2);
        assert_eq!(format!("{:?}", p), "(1 . 2)");
    }

    #[test]
    fn improper_list_prints_dotted_tail() {
        let p = Term::cons(1, Term::cons(2, 3));
        assert_eq!(format!("{:?}", p), "(1 2 . 3)");
    }

    #[test]
    fn nil_prints_as_empty_parentheses() {
        assert_eq!(format!("{:?}", Term::nil()), "()");
        assert_eq!(format!("{:?}", Term::list(vec![])), "()");
    }

    #[test]
    fn symbols_and_strings_are_distinct_atoms() {
        assert_ne!(Term::sym("olive"), Term::string("olive"));
        assert_eq!(Term::sym("olive"), Term::from("olive"));
    }

    #[test]
    fn tuple_conversion_builds_cons() {
        let p = Term::from((1, 2));
        assert_eq!(p, Term::cons(1, 2));
    }

    #[test]
    fn vec_conversion_builds_proper_list() {
        let l = Term::from(vec![Term::new(1), Term::new(2)]);
        assert_eq!(l, Term::cons(1, Term::cons(2, ())));
    }

    #[test]
    fn equal_atoms_compare_equal_across_allocations() {
        assert_eq!(Term::sym("x"), Term::sym("x"));
        assert_eq!(Term::new(42), Term::new(42));
    }

    #[test]
    fn distinct_variables_are_never_equal() {
        let x = Var::new("x");
        let y = Var::new("x");
        assert_ne!(Term::var(x), Term::var(y));
    }
}
