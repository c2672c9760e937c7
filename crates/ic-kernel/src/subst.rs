//! The substitution kernel: two structural, capture-ignoring substitutions.
//!
//! Neither operation performs alpha-renaming. The reducer avoids capture
//! by minting a fresh name for every binder it introduces (see
//! [`crate::fresh`]), so by the time substitution runs, the replacement
//! term can never contain a name the surrounding term's binders shadow.

use crate::term::{Proj, Term};

/// Replace every `Var(name)` in `term` with a structural copy of `value`.
///
/// `DP0`/`DP1` occurrences of `name` are never targets — they belong to a
/// disjoint namespace of duplication projections. A `Lam(name, _)` shadows
/// `name` in its body: the traversal stops there.
pub fn subst_var(term: &Term, name: &str, value: &Term) -> Term {
    match term {
        Term::Num(n) => Term::Num(*n),
        Term::Var(x) => {
            if x == name {
                value.clone()
            } else {
                Term::Var(x.clone())
            }
        }
        Term::Dp0(x) => Term::Dp0(x.clone()),
        Term::Dp1(x) => Term::Dp1(x.clone()),
        Term::Lam(x, body) => {
            if x == name {
                Term::Lam(x.clone(), body.clone())
            } else {
                Term::Lam(x.clone(), Box::new(subst_var(body, name, value)))
            }
        }
        Term::App(f, a) => Term::App(
            Box::new(subst_var(f, name, value)),
            Box::new(subst_var(a, name, value)),
        ),
        Term::Sup(label, a, b) => Term::Sup(
            label.clone(),
            Box::new(subst_var(a, name, value)),
            Box::new(subst_var(b, name, value)),
        ),
        Term::Dup {
            name: x,
            label,
            value: v,
            body,
        } => Term::Dup {
            name: x.clone(),
            label: label.clone(),
            value: Box::new(subst_var(v, name, value)),
            body: Box::new(subst_var(body, name, value)),
        },
        Term::Era => Term::Era,
        Term::Op2(op, l, r) => Term::Op2(
            *op,
            Box::new(subst_var(l, name, value)),
            Box::new(subst_var(r, name, value)),
        ),
        Term::Pair(a, b) => Term::Pair(
            Box::new(subst_var(a, name, value)),
            Box::new(subst_var(b, name, value)),
        ),
    }
}

/// Replace every `Dp0(name)` with `v0` and every `Dp1(name)` with `v1`.
///
/// `Var` occurrences, even of `name` itself, are never targets.
pub fn subst_proj(term: &Term, name: &str, v0: &Term, v1: &Term) -> Term {
    match term {
        Term::Num(n) => Term::Num(*n),
        Term::Var(x) => Term::Var(x.clone()),
        Term::Dp0(x) => {
            if x == name {
                v0.clone()
            } else {
                Term::Dp0(x.clone())
            }
        }
        Term::Dp1(x) => {
            if x == name {
                v1.clone()
            } else {
                Term::Dp1(x.clone())
            }
        }
        Term::Lam(x, body) => Term::Lam(x.clone(), Box::new(subst_proj(body, name, v0, v1))),
        Term::App(f, a) => Term::App(
            Box::new(subst_proj(f, name, v0, v1)),
            Box::new(subst_proj(a, name, v0, v1)),
        ),
        Term::Sup(label, a, b) => Term::Sup(
            label.clone(),
            Box::new(subst_proj(a, name, v0, v1)),
            Box::new(subst_proj(b, name, v0, v1)),
        ),
        Term::Dup {
            name: x,
            label,
            value,
            body,
        } => Term::Dup {
            name: x.clone(),
            label: label.clone(),
            value: Box::new(subst_proj(value, name, v0, v1)),
            body: Box::new(subst_proj(body, name, v0, v1)),
        },
        Term::Era => Term::Era,
        Term::Op2(op, l, r) => Term::Op2(
            *op,
            Box::new(subst_proj(l, name, v0, v1)),
            Box::new(subst_proj(r, name, v0, v1)),
        ),
        Term::Pair(a, b) => Term::Pair(
            Box::new(subst_proj(a, name, v0, v1)),
            Box::new(subst_proj(b, name, v0, v1)),
        ),
    }
}

/// Does `term` contain `DP0(name)` or `DP1(name)` anywhere? Used by
/// DUP-UNUSED to short-circuit without a projection-specific query.
pub fn mentions_either_projection(term: &Term, name: &str) -> bool {
    term.mentions_projection(name, Proj::Zero) || term.mentions_projection(name, Proj::One)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subst_var_replaces_free_occurrences() {
        let body = Term::app(Term::var("x"), Term::var("y"));
        let result = subst_var(&body, "x", &Term::Num(5));
        assert_eq!(result, Term::app(Term::Num(5), Term::var("y")));
    }

    #[test]
    fn subst_var_stops_at_shadowing_lambda() {
        let body = Term::lam("x", Term::var("x"));
        let result = subst_var(&body, "x", &Term::Num(5));
        assert_eq!(result, Term::lam("x", Term::var("x")));
    }

    #[test]
    fn subst_var_never_touches_projections() {
        let body = Term::Dp0("x".into());
        let result = subst_var(&body, "x", &Term::Num(5));
        assert_eq!(result, Term::Dp0("x".into()));
    }

    #[test]
    fn subst_proj_replaces_both_halves() {
        let body = Term::op2(
            crate::term::Op::Add,
            Term::Dp0("x".into()),
            Term::Dp1("x".into()),
        );
        let result = subst_proj(&body, "x", &Term::Num(2), &Term::Num(3));
        assert_eq!(result, Term::op2(crate::term::Op::Add, Term::Num(2), Term::Num(3)));
    }

    #[test]
    fn subst_proj_never_touches_vars() {
        let body = Term::var("x");
        let result = subst_proj(&body, "x", &Term::Num(2), &Term::Num(3));
        assert_eq!(result, Term::var("x"));
    }
}
