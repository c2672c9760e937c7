//! Byte-indexed scanner producing a flat token stream.
//!
//! Mirrors the teacher's two-stage split in spirit (a dedicated scanning
//! pass ahead of the parser) but collapses it to one stage: the surface
//! grammar here has no indentation-sensitive structure to separate out.

use ic_base::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Num(i64),
    Ident(String),
    Dp0(String),
    Dp1(String),
    Lambda,
    Dot,
    Semi,
    Eq,
    Comma,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Amp,
    Bang,
    Plus,
    Minus,
    Star,
    Slash,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Scans the full input and returns every token, including a trailing
/// `Eof` so the parser never has to special-case "ran off the end".
pub fn lex(source: &str) -> Result<Vec<Token>, ic_base::SpannedError> {
    log::debug!("lexing {} byte(s) of source", source.len());
    let chars: Vec<(usize, char)> = source.char_indices().collect();
    let mut lexer = Lexer {
        source,
        chars,
        pos: 0,
    };
    lexer.run()
}

struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn run(&mut self) -> Result<Vec<Token>, ic_base::SpannedError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some((start, c)) = self.peek() else {
                let end = self.source.len();
                tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
                return Ok(tokens);
            };

            let token = match c {
                '\u{3bb}' | '\\' => self.single(start, TokenKind::Lambda),
                '.' => self.single(start, TokenKind::Dot),
                ';' => self.single(start, TokenKind::Semi),
                '=' => self.single(start, TokenKind::Eq),
                ',' => self.single(start, TokenKind::Comma),
                '{' => self.single(start, TokenKind::LBrace),
                '}' => self.single(start, TokenKind::RBrace),
                '(' => self.single(start, TokenKind::LParen),
                ')' => self.single(start, TokenKind::RParen),
                '&' => self.single(start, TokenKind::Amp),
                '!' => self.single(start, TokenKind::Bang),
                '+' => self.single(start, TokenKind::Plus),
                '-' => self.single(start, TokenKind::Minus),
                '*' => self.single(start, TokenKind::Star),
                '/' => self.single(start, TokenKind::Slash),
                '\u{2080}' | '\u{2081}' => {
                    return Err(ic_base::SpannedError::new(
                        "projection suffix with no preceding identifier",
                        Span::at(start),
                    ))
                }
                d if d.is_ascii_digit() => self.number(start),
                a if is_ident_start(a) => self.ident_or_projection(start),
                other => {
                    return Err(ic_base::SpannedError::new(
                        format!("unexpected character '{other}'"),
                        Span::at(start),
                    ))
                }
            };
            log::trace!("lex: {:?} @ {:?}", token.kind, token.span);
            tokens.push(token);
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<(usize, char)> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some((_, c)) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        let (_, c) = self.advance().expect("caller already peeked this character");
        let end = start + c.len_utf8();
        Token::new(kind, Span::new(start, end))
    }

    fn number(&mut self, start: usize) -> Token {
        let mut end = start;
        while let Some((i, c)) = self.peek() {
            if c.is_ascii_digit() {
                end = i + c.len_utf8();
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.source[start..end];
        let value: i64 = text.parse().unwrap_or(i64::MAX);
        Token::new(TokenKind::Num(value), Span::new(start, end))
    }

    /// Reads an identifier, stopping one character early when it is
    /// immediately followed by the ASCII projection suffix `_0`/`_1`, or
    /// by one of the Unicode subscripts — the lookahead rule of §4.2.
    fn ident_or_projection(&mut self, start: usize) -> Token {
        let mut end = start;
        loop {
            match self.peek() {
                Some((i, c)) if is_ident_continue(c) => {
                    if c == '_' && self.starts_ascii_projection_suffix() {
                        break;
                    }
                    end = i + c.len_utf8();
                    self.advance();
                }
                Some((_, '\u{2080}')) | Some((_, '\u{2081}')) => break,
                _ => break,
            }
        }
        let name = self.source[start..end].to_string();

        match self.peek() {
            Some((_, '\u{2080}')) => {
                let (i, c) = self.advance().unwrap();
                Token::new(TokenKind::Dp0(name), Span::new(start, i + c.len_utf8()))
            }
            Some((_, '\u{2081}')) => {
                let (i, c) = self.advance().unwrap();
                Token::new(TokenKind::Dp1(name), Span::new(start, i + c.len_utf8()))
            }
            Some((_, '_')) if self.starts_ascii_projection_suffix() => {
                self.advance(); // '_'
                let (i, digit) = self.advance().unwrap();
                let kind = if digit == '0' {
                    TokenKind::Dp0(name)
                } else {
                    TokenKind::Dp1(name)
                };
                Token::new(kind, Span::new(start, i + digit.len_utf8()))
            }
            _ => Token::new(TokenKind::Ident(name), Span::new(start, end)),
        }
    }

    /// `true` when the character at the cursor is `_` immediately
    /// followed by `0` or `1` with no further identifier character after
    /// it (so `x_0y` stays one identifier, but `x_0` and `x_0.` split).
    fn starts_ascii_projection_suffix(&self) -> bool {
        let Some((_, '_')) = self.peek() else {
            return false;
        };
        match self.peek_at(1) {
            Some((_, '0')) | Some((_, '1')) => {}
            _ => return false,
        }
        !matches!(self.peek_at(2), Some((_, c)) if is_ident_continue(c))
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
