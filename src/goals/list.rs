use crate::goals::primitive::eq;

/// Constructs a cons list.
///
/// Elements are separated by `,`; a `;` introduces an explicit tail.
/// A parenthesized element builds a nested list.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::nil() };

    (($($first:tt)*)) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], ())
    };

    (($($first:tt)*), $($rest:tt)*) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], $crate::list![$($rest)*])
    };

    ($single:expr) => {
        $crate::prelude::Term::cons($single, ())
    };

    ($car:expr ; $cdr:expr) => {
        $crate::prelude::Term::cons($car, $cdr)
    };

    ($first:expr, $($rest:tt)*) => {
        $crate::prelude::Term::cons($first, $crate::list![$($rest)*])
    };
}

defrel! {
    /// Creates a goal that succeeds if p is equivalent to (a . d).
    pub conso(a, d, p) {
        eq((a, d), p)
    }
}

defrel! {
    /// Creates a goal that succeeds if p is a pair and its first element is equivalent to a.
    pub caro(p, a) {
        fresh!{ (d),
            eq((a, d), p)
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if p is a pair and its second element is equivalent to d.
    pub cdro(p, d) {
        fresh!{ (a),
            eq((a, d), p)
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if p is a pair.
    pub pairo(p) {
        fresh! { (a, d),
            eq((a, d), p)
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if x is a member of list l.
    pub membero(x, l) {
        conde! {
            fresh!((d), eq((x.clone(), d), l.clone()));
            fresh!((a, d), eq((a, d.clone()), l.clone()), membero(x.clone(), d));
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if two lists can be appended to form a third.
    pub appendo(l, s, out) {
        conde! {
            eq(l.clone(), ()), eq(s.clone(), out.clone());
            fresh!( (a, d, res),
                eq((a.clone(), d.clone()), l.clone()),
                eq((a, res.clone()), out.clone()),
                appendo(d, s.clone(), res),
            );
        }
    }
}
