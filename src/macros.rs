//! Macros for embedding the relational language as a DSL in Rust.
//!
//! These forms are a convenience front-end; the same clause shapes can be
//! built as data and compiled through [`crate::clause`].

/// Creates a goal that succeeds if any of its subgoals succeeds.
///
/// Subgoals are separated by `;`. The empty disjunction fails. Folding is
/// left-associative, so the leftmost alternatives are explored first.
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr $(;)?) => { $g };
    ($g0:expr; $g1:expr $(; $g:expr)* $(;)?) => {
        $crate::disj!($crate::prelude::disj2($g0, $g1) $(; $g)*)
    };
}

/// Creates a goal that succeeds if all of its subgoals succeed.
///
/// Subgoals are separated by `,`. The empty conjunction succeeds. Folding
/// is left-associative: every answer of the accumulated prefix drives the
/// next subgoal.
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr $(,)?) => { $g };
    ($g0:expr, $g1:expr $(, $g:expr)* $(,)?) => {
        $crate::conj!($crate::prelude::conj2($g0, $g1) $(, $g)*)
    };
}

/// Define a relation.
///
/// A relation is a function from argument terms to a goal. The goal
/// suspends its body for one step when applied, so relations may call
/// themselves without diverging at construction time. The `trace` variants
/// log every application of the relation through the `log` facade.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::Substitution>
        {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::Substitution>
        {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* pub trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::Substitution>
        {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*)
            -> impl $crate::prelude::Goal<$crate::prelude::Substitution>
        {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    // alternate syntax: separate goals with ;
    (pub $name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{pub $name($($args),*) { $($g),* }}
    };

    ($name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{$name($($args),*) { $($g),* }}
    };

    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::Substitution| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};

    (@tracebody: $name:ident, $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::Substitution| {
            $(
                $crate::log::trace!(
                    "{} {}={:?}",
                    stringify!($name),
                    stringify!($args),
                    s.reify(&$args)
                );
            )*
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};
}

/// Run one or more goals against the empty state and reify the query.
///
/// `run!(n, q, goals...)` produces at most `n` reified answers;
/// `run!(*, q, goals...)` produces every answer (and may not terminate);
/// `run!(q, goals...)` returns a lazy iterator over the answers. The query
/// may also be a variable list `(x, y, ...)`, in which case each answer is
/// the reified list `[x, y, ...]`.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ *, ($($x),*), $($body)*)
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ *, $q, $($g),*)
    };

    ($n:expr, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ $n, ($($x),*), $($body)*)
    };

    ($n:tt, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ $n, $q, $($g),*)
    };

    (($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ iter, ($($x),*), $($body)*)
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ iter, $q, $($g),*)
    };

    (@ $n:tt, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ $n, q, {
            $crate::fresh!(
                ($($x),*),
                $crate::prelude::eq(
                    vec![$($crate::prelude::Term::from(&$x)),*],
                    q
                ),
                $($g),*
            )
        })
    };

    (@ *, $q:ident, $($g:expr),* $(,)?) => {{
        let $q = $crate::prelude::Var::new(stringify!($q));
        let var = $crate::prelude::Term::var($q.clone());
        $crate::prelude::Goal::run_inf(&$crate::conj!($($g),*)).map(move |s| s.reify(&var))
    }};

    (@ iter, $q:ident, $($g:expr),* $(,)?) => {{
        let $q = $crate::prelude::Var::new(stringify!($q));
        let var = $crate::prelude::Term::var($q.clone());
        $crate::prelude::Goal::iter(&$crate::conj!($($g),*)).map(move |s| s.reify(&var))
    }};

    (@ $n:expr, $q:ident, $($g:expr),* $(,)?) => {{
        let $q = $crate::prelude::Var::new(stringify!($q));
        let var = $crate::prelude::Term::var($q.clone());
        $crate::prelude::Goal::run(&$crate::conj!($($g),*), $n).map(move |s| s.reify(&var))
    }};
}

/// Bind fresh variables with scope inside the body of `fresh!`.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),* $(,)?) => {{
        $( let $x = $crate::prelude::Var::new(stringify!($x)); )*
        $crate::conj!($($g),*)
    }}
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (terminated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),*;)* ) => {
        $crate::disj!($($crate::conj!( $($g),*));*)
    }
}
