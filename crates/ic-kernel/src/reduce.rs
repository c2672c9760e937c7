//! The reducer: small-step head reduction with recursion into subterms
//! already at a value, implementing the rule set of §4.4.
//!
//! # Reduction Rules
//!
//! - APP-LAM, APP-SUP, APP-ERA — application against a function, a
//!   superposition of functions, or erasure.
//! - OP2-NUM, OP2-SUP-L, OP2-SUP-R, OP2-ERA-L, OP2-ERA-R — arithmetic,
//!   including its commutation through superposition and absorption by
//!   erasure.
//! - DUP-UNUSED, DUP-NUM, DUP-ERA, DUP-SUP (same/other label), DUP-LAM,
//!   DUP-PAIR — duplication of a shared value, one arm per value shape.
//!
//! Division by zero yields `0`; an `Op2` whose operands never settle into
//! one of the recognized shapes is its own normal form, same for an `App`
//! whose function position is stuck on a free variable.
//!
//! # Fuel
//!
//! [`normalize`] repeats [`step`] until the term stops changing (checked
//! by structural equality) or the [`Budget`]'s step bound is exhausted, in
//! which case the current best-effort term is returned — exhaustion is
//! not an error, see [`Budget::exhausted`].

use crate::fresh::Budget;
use crate::subst::{mentions_either_projection, subst_proj, subst_var};
use crate::term::{Op, Term};

/// Reduce `term` to normal form, or to the best-effort fixpoint if the
/// budget's step bound is reached first.
pub fn normalize(term: &Term, budget: &mut Budget) -> Term {
    let mut current = term.clone();
    loop {
        if !budget.tick() {
            return current;
        }
        let next = step(&current, budget);
        if next == current {
            return current;
        }
        log::trace!("step {}: {} -> {}", budget.steps_taken(), current, next);
        current = next;
    }
}

/// Convenience: `normalize` with the default 10,000-step budget, returning
/// the term together with the budget actually used.
pub fn normalize_default(term: &Term) -> (Term, Budget) {
    let mut budget = Budget::default();
    let result = normalize(term, &mut budget);
    (result, budget)
}

/// How a [`normalize`] call terminated: how many successor steps it took,
/// and whether it stopped because the budget ran out rather than because
/// it reached an actual fixpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub steps: u32,
    pub exhausted: bool,
}

/// [`normalize`] plus its [`NormalizeReport`], using the default budget.
pub fn normalize_with_report(term: &Term) -> (Term, NormalizeReport) {
    let (result, budget) = normalize_default(term);
    (
        result,
        NormalizeReport {
            steps: budget.steps_taken(),
            exhausted: budget.exhausted(),
        },
    )
}

/// A single successor step of the driver described in §4.4: produces one
/// rewritten term, recursing into sub-positions when the head is already
/// a value. Exposed publicly so a REPL can trace reduction step by step.
pub fn step(term: &Term, budget: &mut Budget) -> Term {
    match term {
        Term::Num(_) | Term::Var(_) | Term::Dp0(_) | Term::Dp1(_) | Term::Era => term.clone(),

        Term::Lam(x, body) => Term::Lam(x.clone(), Box::new(step(body, budget))),

        Term::Sup(label, a, b) => Term::Sup(
            label.clone(),
            Box::new(step(a, budget)),
            Box::new(step(b, budget)),
        ),

        Term::Pair(a, b) => Term::Pair(Box::new(step(a, budget)), Box::new(step(b, budget))),

        Term::App(func, arg) => step_app(func, arg, budget),

        Term::Op2(op, l, r) => step_op2(*op, l, r, budget),

        Term::Dup {
            name,
            label,
            value,
            body,
        } => step_dup(name, label, value, body, budget),
    }
}

fn step_app(func: &Term, arg: &Term, budget: &mut Budget) -> Term {
    if let Some(result) = try_app_rule(func, arg, budget) {
        return result;
    }
    let reduced_func = step(func, budget);
    if &reduced_func != func {
        return Term::App(Box::new(reduced_func), Box::new(arg.clone()));
    }
    // function position is stuck (e.g. a free variable) — reduce the argument
    let reduced_arg = step(arg, budget);
    Term::App(Box::new(func.clone()), Box::new(reduced_arg))
}

fn try_app_rule(func: &Term, arg: &Term, budget: &mut Budget) -> Option<Term> {
    match func {
        // APP-LAM: (λx. body arg) -> body[x := arg]
        Term::Lam(x, body) => Some(subst_var(body, x, arg)),

        // APP-SUP: (Γ{a,b} arg) -> ! y &Γ= arg; Γ{(a y0), (b y1)}
        Term::Sup(label, a, b) => {
            let y = budget.fresh();
            let lhs = Term::app((**a).clone(), Term::Dp0(y.clone()));
            let rhs = Term::app((**b).clone(), Term::Dp1(y.clone()));
            Some(Term::dup(
                y,
                label.clone(),
                arg.clone(),
                Term::sup(label.clone(), lhs, rhs),
            ))
        }

        // APP-ERA: (&{} arg) -> &{}
        Term::Era => Some(Term::Era),

        _ => None,
    }
}

fn step_op2(op: Op, l: &Term, r: &Term, budget: &mut Budget) -> Term {
    if let Some(result) = try_op2_rule(op, l, r, budget) {
        return result;
    }
    let reduced_l = step(l, budget);
    if &reduced_l != l {
        return Term::Op2(op, Box::new(reduced_l), Box::new(r.clone()));
    }
    let reduced_r = step(r, budget);
    Term::Op2(op, Box::new(l.clone()), Box::new(reduced_r))
}

fn try_op2_rule(op: Op, l: &Term, r: &Term, budget: &mut Budget) -> Option<Term> {
    // Erasure absorbs unconditionally, on either side, even against a
    // superposition on the other side (OP2-ERA-L / OP2-ERA-R).
    if matches!(l, Term::Era) || matches!(r, Term::Era) {
        return Some(Term::Era);
    }
    match (l, r) {
        // OP2-NUM
        (Term::Num(m), Term::Num(n)) => Some(Term::Num(op.apply(*m, *n))),

        // OP2-SUP-L: (Γ{a,b} op R) -> ! y &Γ= R; Γ{(a op y0), (b op y1)}
        (Term::Sup(label, a, b), _) => {
            let y = budget.fresh();
            let lhs = Term::op2(op, (**a).clone(), Term::Dp0(y.clone()));
            let rhs = Term::op2(op, (**b).clone(), Term::Dp1(y.clone()));
            Some(Term::dup(
                y,
                label.clone(),
                r.clone(),
                Term::sup(label.clone(), lhs, rhs),
            ))
        }

        // OP2-SUP-R: (L op Γ{a,b}) -> Γ{(L op a), (L op b)}
        (_, Term::Sup(label, a, b)) => Some(Term::sup(
            label.clone(),
            Term::op2(op, l.clone(), (**a).clone()),
            Term::op2(op, l.clone(), (**b).clone()),
        )),

        _ => None,
    }
}

fn step_dup(name: &str, label: &str, value: &Term, body: &Term, budget: &mut Budget) -> Term {
    // DUP-UNUSED must be checked before ever touching `value` — an unused
    // duplication must not force a non-terminating value.
    if !mentions_either_projection(body, name) {
        return body.clone();
    }

    if let Some(result) = try_dup_rule(name, label, value, body, budget) {
        return result;
    }

    let reduced_value = step(value, budget);
    if &reduced_value != value {
        return Term::dup(name, label, reduced_value, body.clone());
    }

    // value is stuck; recurse into the body
    let reduced_body = step(body, budget);
    Term::dup(name, label, value.clone(), reduced_body)
}

fn try_dup_rule(name: &str, label: &str, value: &Term, body: &Term, budget: &mut Budget) -> Option<Term> {
    match value {
        // DUP-NUM
        Term::Num(n) => Some(subst_proj(body, name, &Term::Num(*n), &Term::Num(*n))),

        // DUP-ERA
        Term::Era => Some(subst_proj(body, name, &Term::Era, &Term::Era)),

        Term::Sup(value_label, a, b) => {
            if value_label == label {
                // DUP-SUP, same label: annihilation
                Some(subst_proj(body, name, a, b))
            } else {
                // DUP-SUP, other label: commutation
                let a_name = budget.fresh();
                let b_name = budget.fresh();
                let v0 = Term::sup(
                    value_label.clone(),
                    Term::Dp0(a_name.clone()),
                    Term::Dp0(b_name.clone()),
                );
                let v1 = Term::sup(
                    value_label.clone(),
                    Term::Dp1(a_name.clone()),
                    Term::Dp1(b_name.clone()),
                );
                let new_body = subst_proj(body, name, &v0, &v1);
                Some(Term::dup(
                    a_name,
                    label,
                    (**a).clone(),
                    Term::dup(b_name, label, (**b).clone(), new_body),
                ))
            }
        }

        // DUP-LAM
        Term::Lam(y, m) => {
            let y0 = budget.fresh();
            let y1 = budget.fresh();
            let z = budget.fresh();
            let dup_arg = Term::sup(label, Term::var(y0.clone()), Term::var(y1.clone()));
            let inner_value = subst_var(m, y, &dup_arg);
            let new_body = subst_proj(
                body,
                name,
                &Term::lam(y0, Term::Dp0(z.clone())),
                &Term::lam(y1, Term::Dp1(z.clone())),
            );
            Some(Term::dup(z, label, inner_value, new_body))
        }

        // DUP-PAIR
        Term::Pair(a, b) => {
            let a_name = budget.fresh();
            let b_name = budget.fresh();
            let new_body = subst_proj(
                body,
                name,
                &Term::pair(Term::Dp0(a_name.clone()), Term::Dp0(b_name.clone())),
                &Term::pair(Term::Dp1(a_name.clone()), Term::Dp1(b_name.clone())),
            );
            Some(Term::dup(
                a_name,
                label,
                (**a).clone(),
                Term::dup(b_name, label, (**b).clone(), new_body),
            ))
        }

        _ => None,
    }
}
