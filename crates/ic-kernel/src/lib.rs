//! The interaction-calculus reducer.
//!
//! This crate owns the [`Term`] model, the two substitution operations that
//! implement it, and the confluent small-step rewrite system that reduces a
//! term to normal form (or to a best-effort fixpoint, once the step budget
//! in [`Budget`] runs out).
//!
//! This crate has no path to `ic-syntax`: it never parses source text and
//! never produces a diagnostic tied to a byte offset. Concrete grammar
//! lives one layer up; this crate only ever sees and produces [`Term`]
//! values.

pub mod fresh;
pub mod reduce;
pub mod subst;
pub mod term;

pub use fresh::{Budget, DEFAULT_MAX_STEPS};
pub use reduce::{normalize, normalize_default, normalize_with_report, step, NormalizeReport};
pub use subst::{mentions_either_projection, subst_proj, subst_var};
pub use term::{Op, Proj, Term, DEFAULT_LABEL};
