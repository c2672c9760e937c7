//! Source-level diagnostic rendering for `ic_base::SpannedError`.
//!
//! Every failure the lexer or parser produces is already a `SpannedError`;
//! this module only adds a human-readable rendering of one against the
//! original source text, simplified from the teacher's
//! `ParseError::display_with_source` (no spelling-suggestion lookup — the
//! surface grammar has no word lexicon to suggest from).

use ic_base::SpannedError;

/// Render `error` against `source` as a one-line message followed by the
/// offending source line and a caret underline.
///
/// ```text
/// error: expected ')' at 4..5
///   (f x
///       ^
/// ```
pub fn render(error: &SpannedError, source: &str) -> String {
    let (line_num, line_start, line_content) = line_context(source, error.span.start);
    let col = error.span.start.saturating_sub(line_start);
    let underline_len = error.span.len().max(1);

    format!(
        "error: {} ({}:{})\n  {}\n  {}{}",
        error.message,
        line_num,
        col + 1,
        line_content,
        " ".repeat(col),
        "^".repeat(underline_len)
    )
}

fn line_context(source: &str, offset: usize) -> (usize, usize, &str) {
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|off| line_start + off)
        .unwrap_or(source.len());

    (line_num, line_start, &source[line_start..line_end])
}
