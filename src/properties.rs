//! Property tests for the engine's universally quantified invariants.

use crate::core::goal::Goal;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use crate::core::var::Var;
use crate::goals::combinators::{conj2, disj2};
use crate::goals::primitive::{eq, fail, succeed};
use proptest::prelude::*;
use std::sync::OnceLock;

/// A small shared pool of variables so that generated terms overlap.
fn var_pool() -> &'static [Var] {
    static POOL: OnceLock<Vec<Var>> = OnceLock::new();
    POOL.get_or_init(|| (0..4).map(|i| Var::new(format!("v{}", i))).collect())
}

fn ground_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        Just(Term::nil()),
        any::<bool>().prop_map(Term::from),
        (-100i64..100).prop_map(Term::from),
        "[a-z]{1,4}".prop_map(Term::sym),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        (inner.clone(), inner).prop_map(|(a, d)| Term::cons(a, d))
    })
}

fn term_with_vars() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        3 => ground_term(),
        2 => (0..var_pool().len()).prop_map(|i| Term::var(var_pool()[i].clone())),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        (inner.clone(), inner).prop_map(|(a, d)| Term::cons(a, d))
    })
}

fn seed_pairs() -> impl Strategy<Value = Vec<(Term, Term)>> {
    proptest::collection::vec((term_with_vars(), term_with_vars()), 0..4)
}

/// Build a substitution by unifying random term pairs, keeping whatever
/// extensions succeed.
fn substitution_from(pairs: Vec<(Term, Term)>) -> Substitution {
    let mut s = Substitution::empty();
    for (u, v) in pairs {
        if let Some(next) = s.unify(&u, &v) {
            s = next;
        }
    }
    s
}

fn contains_no_var(t: &Term) -> bool {
    match t {
        Term::Var(_) => false,
        Term::Atom(_) => true,
        Term::Pair(a, d) => contains_no_var(a) && contains_no_var(d),
    }
}

proptest! {
    #[test]
    fn unification_makes_terms_deep_walk_equal(
        seed in seed_pairs(),
        u in term_with_vars(),
        v in term_with_vars(),
    ) {
        let s = substitution_from(seed);
        if let Some(s2) = s.unify(&u, &v) {
            prop_assert_eq!(s2.walk_star(&u), s2.walk_star(&v));
        }
    }

    #[test]
    fn extend_succeeds_exactly_when_the_variable_does_not_occur(
        seed in seed_pairs(),
        t in term_with_vars(),
        i in 0..4usize,
    ) {
        let x = var_pool()[i].clone();
        let s = substitution_from(seed);
        match s.extend(x.clone(), t.clone()) {
            Some(s2) => {
                prop_assert!(!s.occurs(&x, &t));
                // every walk on the extended substitution terminates
                for v in var_pool() {
                    let _ = s2.walk_star(&Term::var(v.clone()));
                }
            }
            None => prop_assert!(s.occurs(&x, &t)),
        }
    }

    #[test]
    fn extend_leaves_the_original_substitution_untouched(
        seed in seed_pairs(),
        t in ground_term(),
    ) {
        let s = substitution_from(seed);
        let snapshot = s.clone();
        let x = Var::new("fresh");
        let _ = s.extend(x, t);
        prop_assert_eq!(s, snapshot);
    }

    #[test]
    fn reify_is_deterministic_and_ground(
        seed in seed_pairs(),
        t in term_with_vars(),
    ) {
        let s = substitution_from(seed);
        let first = s.reify(&t);
        let second = s.reify(&t);
        prop_assert_eq!(&first, &second);
        prop_assert!(contains_no_var(&first));
    }

    #[test]
    fn succeed_is_the_identity_of_conjunction(
        u in term_with_vars(),
        v in term_with_vars(),
    ) {
        let g = eq(u, v);
        let plain = g.clone().apply(Substitution::empty()).into_vec();
        let left = conj2(succeed(), g.clone()).apply(Substitution::empty()).into_vec();
        let right = conj2(g, succeed()).apply(Substitution::empty()).into_vec();
        prop_assert_eq!(&left, &plain);
        prop_assert_eq!(&right, &plain);
    }

    #[test]
    fn fail_is_the_identity_of_disjunction(
        u in term_with_vars(),
        v in term_with_vars(),
    ) {
        let g = eq(u, v);
        let plain = g.clone().apply(Substitution::empty()).into_vec();
        let left = disj2(fail(), g.clone()).apply(Substitution::empty()).into_vec();
        let right = disj2(g, fail()).apply(Substitution::empty()).into_vec();
        prop_assert_eq!(&left, &plain);
        prop_assert_eq!(&right, &plain);
    }

    #[test]
    fn identical_round_trips_ground_values(v in ground_term()) {
        let answers = run!(*, q, eq(q.clone(), v.clone())).into_vec();
        prop_assert_eq!(answers, vec![v]);
    }
}
