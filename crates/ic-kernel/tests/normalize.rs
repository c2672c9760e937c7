//! End-to-end normalization scenarios, exercised through the public API
//! only (no internal helpers), mirroring the worked examples.

use ic_kernel::{normalize_default, term::Op, Term};

fn nf(term: Term) -> Term {
    normalize_default(&term).0
}

#[test]
fn church_two_applied_to_successor_and_zero() {
    // (λs. λz. (s (s z))) applied to a successor function and zero.
    let succ = Term::lam("n", Term::op2(Op::Add, Term::var("n"), Term::Num(1)));
    let two = Term::lam(
        "s",
        Term::lam(
            "z",
            Term::app(Term::var("s"), Term::app(Term::var("s"), Term::var("z"))),
        ),
    );
    let applied = Term::app(Term::app(two, succ), Term::Num(0));
    assert_eq!(nf(applied), Term::Num(2));
}

#[test]
fn sharing_a_pair_through_duplication() {
    // ! p &L= (10, 20); (p0, p1): DUP-PAIR duplicates the components, so
    // each projection is its own independent copy of the whole pair.
    let t = Term::dup(
        "p",
        "L",
        Term::pair(Term::Num(10), Term::Num(20)),
        Term::pair(Term::Dp0("p".into()), Term::Dp1("p".into())),
    );
    let whole = Term::pair(Term::Num(10), Term::Num(20));
    assert_eq!(nf(t), Term::pair(whole.clone(), whole));
}

#[test]
fn nested_duplication_of_distinct_labels_commutes_cleanly() {
    // Duplicating a value built from a superposition under a different
    // label must commute past the outer duplication rather than
    // annihilate, per DUP-SUP's other-label arm. Using Pair (rather than
    // Op2) around the two projections keeps the surviving superpositions
    // from interacting further, so the result is exactly two copies of
    // the original superposition.
    let inner = Term::sup("A", Term::Num(1), Term::Num(2));
    let t = Term::dup(
        "x",
        "B",
        inner,
        Term::pair(Term::Dp0("x".into()), Term::Dp1("x".into())),
    );
    let copy = Term::sup("A", Term::Num(1), Term::Num(2));
    assert_eq!(nf(t), Term::pair(copy.clone(), copy));
}

#[test]
fn complex_sharing_re_duplicates_a_function_through_two_independent_uses() {
    // A shared identity function applied at two call sites, each of which
    // re-duplicates its own copy — the two results must stay independent.
    let id = Term::lam("x", Term::var("x"));
    let t = Term::dup(
        "f",
        "L",
        id,
        Term::dup(
            "g",
            "M",
            Term::Dp0("f".into()),
            Term::pair(
                Term::app(Term::Dp0("g".into()), Term::Num(100)),
                Term::app(Term::Dp1("g".into()), Term::app(Term::Dp1("f".into()), Term::Num(200))),
            ),
        ),
    );
    assert_eq!(nf(t), Term::pair(Term::Num(100), Term::Num(200)));
}

#[test]
fn unused_duplication_never_forces_its_value() {
    let stuck_forever = Term::app(Term::var("free"), Term::var("free"));
    let t = Term::dup("x", "L", stuck_forever, Term::Num(7));
    assert_eq!(nf(t), Term::Num(7));
}

#[test]
fn division_by_zero_is_total() {
    assert_eq!(nf(Term::op2(Op::Div, Term::Num(5), Term::Num(0))), Term::Num(0));
}

#[test]
fn erasure_absorbs_through_application() {
    let t = Term::app(Term::Era, Term::app(Term::var("x"), Term::var("y")));
    assert_eq!(nf(t), Term::Era);
}

#[test]
fn nested_application_of_a_constant_function() {
    // ((λx.λy.x 1) 2): the constant function discards its second argument.
    let k = Term::lam("x", Term::lam("y", Term::var("x")));
    let t = Term::app(Term::app(k, Term::Num(1)), Term::Num(2));
    assert_eq!(nf(t), Term::Num(1));
}

#[test]
fn subtraction_is_exercised_end_to_end() {
    assert_eq!(nf(Term::op2(Op::Sub, Term::Num(10), Term::Num(3))), Term::Num(7));
    assert_eq!(nf(Term::op2(Op::Sub, Term::Num(3), Term::Num(10))), Term::Num(-7));
}

#[test]
fn function_duplication_shares_a_computation_instead_of_a_specialization() {
    // ! f &L= λx.(2+2); ((f0 1), (f1 2)): both applications discard their
    // argument and reduce the shared body to the same numeral.
    let body = Term::lam("x", Term::op2(Op::Add, Term::Num(2), Term::Num(2)));
    let t = Term::dup(
        "f",
        "L",
        body,
        Term::pair(
            Term::app(Term::Dp0("f".into()), Term::Num(1)),
            Term::app(Term::Dp1("f".into()), Term::Num(2)),
        ),
    );
    assert_eq!(nf(t), Term::pair(Term::Num(4), Term::Num(4)));
}
