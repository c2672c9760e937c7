//! The term model of the interaction calculus.
//!
//! Every term in the calculus is a [`Term`]. There is no distinction
//! between values and expressions: normalization rewrites a `Term` into
//! another `Term`, always a smaller or equal tree until a normal form (or
//! the safety bound) is reached.

use std::fmt;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    /// Apply the operator to two numerals. Division by zero yields `0`,
    /// per the calculus's total-arithmetic rule (OP2-NUM); division and
    /// the remainder truncate toward zero.
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Op::Add => lhs.wrapping_add(rhs),
            Op::Sub => lhs.wrapping_sub(rhs),
            Op::Mul => lhs.wrapping_mul(rhs),
            Op::Div => {
                if rhs == 0 {
                    0
                } else {
                    lhs.wrapping_div(rhs)
                }
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which half of a duplication a [`Term::Dp0`]/[`Term::Dp1`] occurrence
/// refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proj {
    Zero,
    One,
}

/// The default superposition/duplication label when none is written in
/// source, per the surface grammar of §6.
pub const DEFAULT_LABEL: &str = "L";

/// An interaction-calculus term.
///
/// Every non-leaf variant owns its immediate children; there is no sharing
/// beyond what the reducer temporarily introduces while substituting, and
/// no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// An integer literal.
    Num(i64),
    /// An ordinary (linear) variable occurrence.
    Var(String),
    /// The left projection of duplication binder `x`.
    Dp0(String),
    /// The right projection of duplication binder `x`.
    Dp1(String),
    /// `λx.body`, binding `x` in `body`.
    Lam(String, Box<Term>),
    /// `(f a)`.
    App(Box<Term>, Box<Term>),
    /// `&L{a,b}`, a labelled pair of alternatives.
    Sup(String, Box<Term>, Box<Term>),
    /// `! x &L= value; body`. Within `body`, `x₀`/`x₁` stand for the two
    /// shared projections of `value`.
    Dup {
        name: String,
        label: String,
        value: Box<Term>,
        body: Box<Term>,
    },
    /// `&{}`, the erasure / null term.
    Era,
    /// `(a op b)`.
    Op2(Op, Box<Term>, Box<Term>),
    /// `(a, b)`.
    Pair(Box<Term>, Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Term {
        Term::Var(name.into())
    }

    pub fn lam(name: impl Into<String>, body: Term) -> Term {
        Term::Lam(name.into(), Box::new(body))
    }

    pub fn app(func: Term, arg: Term) -> Term {
        Term::App(Box::new(func), Box::new(arg))
    }

    pub fn sup(label: impl Into<String>, a: Term, b: Term) -> Term {
        Term::Sup(label.into(), Box::new(a), Box::new(b))
    }

    pub fn dup(name: impl Into<String>, label: impl Into<String>, value: Term, body: Term) -> Term {
        Term::Dup {
            name: name.into(),
            label: label.into(),
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    pub fn op2(op: Op, lhs: Term, rhs: Term) -> Term {
        Term::Op2(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn pair(a: Term, b: Term) -> Term {
        Term::Pair(Box::new(a), Box::new(b))
    }

    /// Whether `term` contains any occurrence of `DPi{name}` for the given
    /// projection `proj`, anywhere in its tree (including under binders —
    /// a `Dup`/`Lam` of the same name shadows only `Var`, never `DPi`,
    /// since projections are never substitution targets of `subst_var`).
    pub fn mentions_projection(&self, name: &str, proj: Proj) -> bool {
        match self {
            Term::Num(_) | Term::Var(_) | Term::Era => false,
            Term::Dp0(x) => proj == Proj::Zero && x == name,
            Term::Dp1(x) => proj == Proj::One && x == name,
            Term::Lam(_, body) => body.mentions_projection(name, proj),
            Term::App(f, a) => {
                f.mentions_projection(name, proj) || a.mentions_projection(name, proj)
            }
            Term::Sup(_, a, b) => {
                a.mentions_projection(name, proj) || b.mentions_projection(name, proj)
            }
            Term::Dup { value, body, .. } => {
                value.mentions_projection(name, proj) || body.mentions_projection(name, proj)
            }
            Term::Op2(_, l, r) => {
                l.mentions_projection(name, proj) || r.mentions_projection(name, proj)
            }
            Term::Pair(a, b) => {
                a.mentions_projection(name, proj) || b.mentions_projection(name, proj)
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Num(n) => write!(f, "{}", n),
            Term::Var(x) => write!(f, "{}", x),
            Term::Dp0(x) => write!(f, "{}\u{2080}", x),
            Term::Dp1(x) => write!(f, "{}\u{2081}", x),
            Term::Lam(x, body) => write!(f, "\u{3bb}{}.{}", x, body),
            Term::App(func, arg) => write!(f, "({} {})", func, arg),
            Term::Sup(label, a, b) => write!(f, "&{}{{{}, {}}}", label, a, b),
            Term::Dup {
                name,
                label,
                value,
                body,
            } => write!(f, "! {} &{}= {}; {}", name, label, value, body),
            Term::Era => write!(f, "&{{}}"),
            Term::Op2(op, l, r) => write!(f, "({} {} {})", l, op, r),
            Term::Pair(a, b) => write!(f, "({}, {})", a, b),
        }
    }
}
