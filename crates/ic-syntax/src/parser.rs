//! Recursive-descent parser over the token stream, producing `ic_kernel::Term`.
//!
//! Mirrors the teacher's `Parser` shape: an owned token vector, a cursor,
//! and `peek`/`advance`/`expect` primitives, scaled down to the handful of
//! productions the surface grammar actually has.

use ic_kernel::Term;

use crate::lexer::{self, Token, TokenKind};

pub type ParseError = ic_base::SpannedError;
pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

/// Parse `source` as a single complete term. Fails if a redex is malformed
/// or if non-whitespace remains after the term.
pub fn parse(source: &str) -> ParseResult<Term> {
    log::debug!("parsing {} byte(s) of source", source.len());
    let tokens = lexer::lex(source)?;
    let mut parser = Parser::new(tokens);
    let term = parser.parse_term()?;
    parser.expect_eof()?;
    Ok(term)
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if self.current + 1 < self.tokens.len() {
            self.current += 1;
        }
        token
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> ParseResult<Token> {
        if self.peek_kind() == kind {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected {what}")))
        }
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        if matches!(self.peek_kind(), TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.error("trailing input after a complete term"))
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.peek().span)
    }

    /// The label following a `&` sigil. Defaults to `ic_kernel::DEFAULT_LABEL`
    /// when the next token is not an identifier (i.e. the label was omitted).
    fn optional_label(&mut self) -> String {
        if let TokenKind::Ident(name) = self.peek_kind() {
            let name = name.clone();
            self.advance();
            name
        } else {
            ic_kernel::DEFAULT_LABEL.to_string()
        }
    }

    fn parse_term(&mut self) -> ParseResult<Term> {
        log::trace!("parse_term: {:?}", self.peek_kind());
        match self.peek_kind().clone() {
            TokenKind::Num(n) => {
                self.advance();
                Ok(Term::Num(n))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Term::var(name))
            }
            TokenKind::Dp0(name) => {
                self.advance();
                Ok(Term::Dp0(name))
            }
            TokenKind::Dp1(name) => {
                self.advance();
                Ok(Term::Dp1(name))
            }
            TokenKind::Lambda => self.parse_lam(),
            TokenKind::Amp => self.parse_sup_or_era(),
            TokenKind::Bang => self.parse_dup(),
            TokenKind::LParen => self.parse_parenthesized(),
            _ => Err(self.error("expected a term")),
        }
    }

    fn parse_lam(&mut self) -> ParseResult<Term> {
        self.advance(); // lambda
        let name = self.parse_ident("a parameter name")?;
        self.expect(&TokenKind::Dot, "'.'")?;
        let body = self.parse_term()?;
        Ok(Term::lam(name, body))
    }

    fn parse_ident(&mut self, what: &str) -> ParseResult<String> {
        match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.error(format!("expected {what}"))),
        }
    }

    /// `&{}` is `Era`; `&L{a,b}` is `Sup`, with `L` defaulted when absent.
    fn parse_sup_or_era(&mut self) -> ParseResult<Term> {
        self.advance(); // '&'
        let label = self.optional_label();
        self.expect(&TokenKind::LBrace, "'{'")?;
        if matches!(self.peek_kind(), TokenKind::RBrace) {
            self.advance();
            log::trace!("parsed Era");
            return Ok(Term::Era);
        }
        let a = self.parse_term()?;
        self.expect(&TokenKind::Comma, "','")?;
        let b = self.parse_term()?;
        self.expect(&TokenKind::RBrace, "'}'")?;
        Ok(Term::sup(label, a, b))
    }

    /// `! x &L= value; body`.
    fn parse_dup(&mut self) -> ParseResult<Term> {
        self.advance(); // '!'
        let name = self.parse_ident("a binder name")?;
        self.expect(&TokenKind::Amp, "'&'")?;
        let label = self.optional_label();
        self.expect(&TokenKind::Eq, "'='")?;
        let value = self.parse_term()?;
        self.expect(&TokenKind::Semi, "';'")?;
        let body = self.parse_term()?;
        log::trace!("parsed Dup {{ name: {name}, label: {label} }}");
        Ok(Term::dup(name, label, value, body))
    }

    /// Everything inside `( ... )`: disambiguated by the token following
    /// the first nested term, per §4.2 — `,` is a pair, an operator is
    /// `Op2`, anything else is an application.
    fn parse_parenthesized(&mut self) -> ParseResult<Term> {
        self.advance(); // '('
        let first = self.parse_term()?;
        let term = match self.peek_kind() {
            TokenKind::Comma => {
                self.advance();
                let second = self.parse_term()?;
                log::trace!("disambiguated parenthesized term as Pair");
                Term::pair(first, second)
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
                let op = self.parse_op()?;
                let second = self.parse_term()?;
                log::trace!("disambiguated parenthesized term as Op2 ({op})");
                Term::op2(op, first, second)
            }
            _ => {
                let second = self.parse_term()?;
                log::trace!("disambiguated parenthesized term as App");
                Term::app(first, second)
            }
        };
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(term)
    }

    fn parse_op(&mut self) -> ParseResult<ic_kernel::Op> {
        let op = match self.peek_kind() {
            TokenKind::Plus => ic_kernel::Op::Add,
            TokenKind::Minus => ic_kernel::Op::Sub,
            TokenKind::Star => ic_kernel::Op::Mul,
            TokenKind::Slash => ic_kernel::Op::Div,
            _ => return Err(self.error("expected an operator")),
        };
        self.advance();
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identity_application() {
        let t = parse("((\\x.x) 5)").unwrap();
        assert_eq!(t, Term::app(Term::lam("x", Term::var("x")), Term::Num(5)));
    }

    #[test]
    fn parses_superposition_with_default_label() {
        let t = parse("&{1, 2}").unwrap();
        assert_eq!(
            t,
            Term::sup(ic_kernel::DEFAULT_LABEL, Term::Num(1), Term::Num(2))
        );
    }

    #[test]
    fn parses_era() {
        assert_eq!(parse("&{}").unwrap(), Term::Era);
    }

    #[test]
    fn parses_labelled_sup() {
        let t = parse("&A{1, 2}").unwrap();
        assert_eq!(t, Term::sup("A", Term::Num(1), Term::Num(2)));
    }

    #[test]
    fn parses_dup_with_projections() {
        let t = parse("! x &L= 3; (x_0 + x\u{2081})").unwrap();
        assert_eq!(
            t,
            Term::dup(
                "x",
                "L",
                Term::Num(3),
                Term::op2(ic_kernel::Op::Add, Term::Dp0("x".into()), Term::Dp1("x".into()))
            )
        );
    }

    #[test]
    fn parses_pair_and_op2_and_app() {
        assert_eq!(parse("(1, 2)").unwrap(), Term::pair(Term::Num(1), Term::Num(2)));
        assert_eq!(
            parse("(1 + 2)").unwrap(),
            Term::op2(ic_kernel::Op::Add, Term::Num(1), Term::Num(2))
        );
        assert_eq!(
            parse("(f x)").unwrap(),
            Term::app(Term::var("f"), Term::var("x"))
        );
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(parse("1 2").is_err());
    }

    #[test]
    fn rejects_missing_delimiter() {
        assert!(parse("&L{1, 2").is_err());
    }

    #[test]
    fn rejects_missing_right_operand() {
        let err = parse("(1 +").unwrap_err();
        assert_eq!(err.span.start, "(1 +".len());
    }

    #[test]
    fn rejects_missing_bound_name() {
        // '\u{3bb}' is a two-byte UTF-8 sequence, so the offending '.' sits
        // at byte offset 2, not 1.
        let err = parse("\u{3bb}.").unwrap_err();
        assert_eq!(err.span, ic_base::Span::new(2, 3));
    }
}
