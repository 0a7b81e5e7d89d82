//! End-to-end scenarios exercising the whole engine.

use crate::prelude::*;
use crate::substitution;
use crate::list;

#[test]
fn trivial_binding() {
    let x = Var::new("x");
    let stream = eq(&x, "olive").apply(Substitution::empty());
    assert_eq!(stream, Stream::singleton(substitution! {x: "olive"}));

    let answers = run!(*, q, eq(q.clone(), "olive")).into_vec();
    assert_eq!(answers, vec![Term::sym("olive")]);
}

#[test]
fn disjunction_answers_arrive_in_clause_order() {
    let answers = run!(*, q,
        disj!(eq(q.clone(), "olive"); eq(q.clone(), "oil"))
    )
    .into_vec();
    assert_eq!(answers, vec![Term::sym("olive"), Term::sym("oil")]);
}

#[test]
fn triangular_substitution_walks_to_the_ground_value() {
    let x = Var::new("x");
    let y = Var::new("y");
    let z = Var::new("z");
    let s = substitution! {x: y, y: z, z: "olive"};

    assert_eq!(s.walk(&Term::from(&x)).clone(), Term::sym("olive"));

    // The equation is already satisfied, so the substitution is unchanged.
    let stream = eq(&x, "olive").apply(s.clone());
    assert_eq!(stream, Stream::singleton(s));
}

#[test]
fn occurs_check_rejects_self_referential_bindings() {
    let answers = run!(*, q, eq(q.clone(), list![q.clone()]));
    assert!(answers.is_empty());
}

#[test]
fn answers_are_reified_with_canonical_names() {
    let answers = run!(*, (x, y), succeed()).into_vec();
    assert_eq!(answers, vec![list![Term::sym("_0"), Term::sym("_1")]]);

    let answers = run!(*, q, fresh!((a, b), eq(q.clone(), list![a.clone(), b.clone(), a.clone()])));
    assert_eq!(
        answers.into_vec(),
        vec![list![Term::sym("_0"), Term::sym("_1"), Term::sym("_0")]]
    );
}

#[test]
fn appendo_enumerates_splits_bidirectionally() {
    let solutions = run!(*, (x, y), appendo(x.clone(), y.clone(), list!["a", "b", "c"]));
    assert_eq!(
        solutions.into_vec(),
        vec![
            list![(), ("a", "b", "c")],
            list![("a"), ("b", "c")],
            list![("a", "b"), ("c")],
            list![("a", "b", "c"), ()],
        ]
    );
}

#[test]
fn recursive_relation_only_searches_on_demand() {
    defrel! {
        loopo(x) {
            loopo(x)
        }
    }

    let q = Var::new("q");
    // Constructing the goal and a zero-answer run both terminate.
    let goal = loopo(q.clone());
    let stream = goal.apply(Substitution::empty());
    assert!(matches!(stream, Stream::Suspension(_)));
    assert!(run!(0, q, loopo(q.clone())).is_empty());
}

defrel! {
    /// x is immediately to the left of y in list l.
    lefto(x, y, l) {
        conde! {
            fresh!((rest), eq(list![x.clone(), y.clone() ; rest], l.clone()));
            fresh!((a, d), eq((a, d.clone()), l.clone()), lefto(x.clone(), y.clone(), d));
        }
    }
}

defrel! {
    /// x and y are adjacent in list l.
    nexto(x, y, l) {
        conde! {
            lefto(x.clone(), y.clone(), l.clone());
            lefto(y.clone(), x.clone(), l.clone());
        }
    }
}

defrel! {
    /// h is the unique street of five houses satisfying all fourteen
    /// neighbourhood clues, with a fish owner and a water drinker living
    /// somewhere on it. Houses are (nationality colour pet drink sport).
    zebrao(h) {
        fresh!((h1, h2, h3, h4, h5),
            eq(
                list![h1.clone(), h2.clone(), h3.clone(), h4.clone(), h5.clone()],
                h.clone()
            ),
            // the Norwegian lives in the first house
            fresh!((c, p, d, s), eq(list!["norwegian", c, p, d, s], h1.clone())),
            // the man in the middle house drinks milk
            fresh!((n, c, p, s), eq(list![n, c, p, "milk", s], h3.clone())),
            // the Norwegian lives next to the blue house
            fresh!((c1, p1, d1, s1, n2, p2, d2, s2),
                nexto(
                    list!["norwegian", c1, p1, d1, s1],
                    list![n2, "blue", p2, d2, s2],
                    h.clone()
                )
            ),
            // the green house is immediately left of the white house
            fresh!((n1, p1, d1, s1, n2, p2, d2, s2),
                lefto(
                    list![n1, "green", p1, d1, s1],
                    list![n2, "white", p2, d2, s2],
                    h.clone()
                )
            ),
            // the owner of the green house drinks coffee
            fresh!((n, p, s), membero(list![n, "green", p, "coffee", s], h.clone())),
            // the Brit lives in the red house
            fresh!((p, d, s), membero(list!["brit", "red", p, d, s], h.clone())),
            // the Swede keeps dogs
            fresh!((c, d, s), membero(list!["swede", c, "dogs", d, s], h.clone())),
            // the Dane drinks tea
            fresh!((c, p, s), membero(list!["dane", c, p, "tea", s], h.clone())),
            // the football player rears birds
            fresh!((n, c, d), membero(list![n, c, "birds", d, "football"], h.clone())),
            // the owner of the yellow house plays baseball
            fresh!((n, p, d), membero(list![n, "yellow", p, d, "baseball"], h.clone())),
            // the volleyball player lives next to the cat owner
            fresh!((n1, c1, p1, d1, n2, c2, d2, s2),
                nexto(
                    list![n1, c1, p1, d1, "volleyball"],
                    list![n2, c2, "cats", d2, s2],
                    h.clone()
                )
            ),
            // the horse keeper lives next to the baseball player
            fresh!((n1, c1, d1, s1, n2, c2, p2, d2),
                nexto(
                    list![n1, c1, "horses", d1, s1],
                    list![n2, c2, p2, d2, "baseball"],
                    h.clone()
                )
            ),
            // the tennis player drinks beer
            fresh!((n, c, p), membero(list![n, c, p, "beer", "tennis"], h.clone())),
            // the German plays hockey
            fresh!((c, p, d), membero(list!["german", c, p, d, "hockey"], h.clone())),
            // somebody owns a fish, somebody drinks water
            fresh!((n, c, d, s), membero(list![n, c, "fish", d, s], h.clone())),
            fresh!((n, c, p, s), membero(list![n, c, p, "water", s], h.clone())),
        )
    }
}

#[test]
fn zebra_puzzle_has_a_unique_solution() {
    let solutions = run!(*, h, zebrao(h.clone())).into_vec();
    assert_eq!(
        solutions,
        vec![list![
            ("norwegian", "yellow", "cats", "water", "baseball"),
            ("dane", "blue", "horses", "tea", "volleyball"),
            ("brit", "red", "birds", "milk", "football"),
            ("german", "green", "fish", "coffee", "hockey"),
            ("swede", "white", "dogs", "beer", "tennis")
        ]]
    );
}

#[test]
fn zebra_clue_order_does_not_affect_the_solution() {
    defrel! {
        // the same street with the membership clues shuffled
        zebrao_shuffled(h) {
            fresh!((h1, h2, h3, h4, h5),
                eq(
                    list![h1.clone(), h2.clone(), h3.clone(), h4.clone(), h5.clone()],
                    h.clone()
                ),
                fresh!((c, p, d, s), eq(list!["norwegian", c, p, d, s], h1.clone())),
                fresh!((n, c, p, s), eq(list![n, c, p, "milk", s], h3.clone())),
                fresh!((c, p, d), membero(list!["german", c, p, d, "hockey"], h.clone())),
                fresh!((n, c, p), membero(list![n, c, p, "beer", "tennis"], h.clone())),
                fresh!((n, p, d), membero(list![n, "yellow", p, d, "baseball"], h.clone())),
                fresh!((n, c, d), membero(list![n, c, "birds", d, "football"], h.clone())),
                fresh!((c, p, s), membero(list!["dane", c, p, "tea", s], h.clone())),
                fresh!((c, d, s), membero(list!["swede", c, "dogs", d, s], h.clone())),
                fresh!((p, d, s), membero(list!["brit", "red", p, d, s], h.clone())),
                fresh!((n, p, s), membero(list![n, "green", p, "coffee", s], h.clone())),
                fresh!((n1, p1, d1, s1, n2, p2, d2, s2),
                    lefto(
                        list![n1, "green", p1, d1, s1],
                        list![n2, "white", p2, d2, s2],
                        h.clone()
                    )
                ),
                fresh!((c1, p1, d1, s1, n2, p2, d2, s2),
                    nexto(
                        list!["norwegian", c1, p1, d1, s1],
                        list![n2, "blue", p2, d2, s2],
                        h.clone()
                    )
                ),
                fresh!((n1, c1, p1, d1, n2, c2, d2, s2),
                    nexto(
                        list![n1, c1, p1, d1, "volleyball"],
                        list![n2, c2, "cats", d2, s2],
                        h.clone()
                    )
                ),
                fresh!((n1, c1, d1, s1, n2, c2, p2, d2),
                    nexto(
                        list![n1, c1, "horses", d1, s1],
                        list![n2, c2, p2, d2, "baseball"],
                        h.clone()
                    )
                ),
                fresh!((n, c, d, s), membero(list![n, c, "fish", d, s], h.clone())),
                fresh!((n, c, p, s), membero(list![n, c, p, "water", s], h.clone())),
            )
        }
    }

    let original = run!(*, h, zebrao(h.clone())).into_vec();
    let shuffled = run!(*, h, zebrao_shuffled(h.clone())).into_vec();
    assert_eq!(original, shuffled);
}

#[test]
fn interleaving_is_fair_between_disjuncts() {
    // An endlessly productive left branch must not starve the right one.
    let answers = run!(4, q, disj!(alwayso(); eq(q.clone(), "done"))).into_vec();
    assert!(answers.contains(&Term::sym("done")));
}
