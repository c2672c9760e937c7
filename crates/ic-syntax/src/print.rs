//! Pretty-printing, the inverse of [`crate::parser::parse`].
//!
//! The canonical rendering is owned by `ic_kernel::Term`'s `Display` impl
//! (it never depends on source text, so it lives with the term model);
//! this module just gives the syntax layer a name for it so callers don't
//! need to know that detail.

use ic_kernel::Term;

/// Render `term` in the canonical surface syntax of §6: `x₀`/`x₁` for
/// projections, `λx.B` for abstraction, `&L{a, b}` for superposition.
pub fn pretty_print(term: &Term) -> String {
    term.to_string()
}
