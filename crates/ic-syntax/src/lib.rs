//! Source text in, `ic_kernel::Term` out, and back again.
//!
//! This is the only crate in the workspace that knows source text exists:
//! `ic-kernel` is reduced to and from `Term` values without ever seeing a
//! byte offset, and this crate is the boundary where byte offsets turn
//! into `Term`s and `Term`s turn back into text.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod print;

pub use error::render;
pub use ic_base::SpannedError;
pub use parser::{parse, ParseError, ParseResult};
pub use print::pretty_print;

pub use ic_kernel::NormalizeReport;
use ic_kernel::Term;

/// Parse and fully reduce `text` in one call, using the default step
/// budget. Mirrors `evaluate(text) -> Term` from the programmatic
/// interface, generalized to also return the step report.
pub fn evaluate(text: &str) -> ParseResult<(Term, NormalizeReport)> {
    let term = parse(text)?;
    Ok(ic_kernel::normalize_with_report(&term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_parses_and_normalizes() {
        let (term, report) = evaluate("((\\x.x) 5)").unwrap();
        assert_eq!(term, Term::Num(5));
        assert!(!report.exhausted);
    }

    #[test]
    fn evaluate_propagates_parse_errors() {
        assert!(evaluate("(1 2").is_err());
    }
}
