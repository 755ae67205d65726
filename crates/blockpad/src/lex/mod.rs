//! Inline lexer for bold spans.
//!
//! Splits text on a toggling delimiter (`*` by default) into alternating
//! plain and bold runs:
//!
//! ```text
//! "Type *bold* text here"  ->  Plain("Type ") Bold("bold") Plain(" text here")
//! ```
//!
//! Each delimiter ends the current run, whatever its length, so consecutive
//! delimiters produce empty tokens. Unbalanced input is accepted: the tail
//! after the last delimiter keeps whichever kind was open. A run is only
//! flushed at end of input if it is non-empty, so a trailing delimiter
//! leaves no trace in the output.

use std::borrow::Cow;

use crate::model::Token;
use crate::options::DEFAULT_DELIMITER;

/// Lexes `input` with the default `*` delimiter.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with(input, DEFAULT_DELIMITER)
}

/// Lexes `input`, toggling bold on every `delimiter`.
pub fn lex_with(input: &str, delimiter: char) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut in_bold = false;
    let mut start = 0;

    for (pos, c) in input.char_indices() {
        if c == delimiter {
            tokens.push(make_token(&input[start..pos], in_bold));
            in_bold = !in_bold;
            start = pos + c.len_utf8();
        }
    }

    if start < input.len() {
        tokens.push(make_token(&input[start..], in_bold));
    }

    tokens
}

/// Joins token texts with `delimiter` between consecutive tokens.
///
/// Inverse of [`lex_with`] except for a trailing delimiter, which the
/// lexer drops.
pub fn render(tokens: &[Token<'_>], delimiter: char) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text().len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(token.text());
    }
    out
}

#[inline]
fn make_token(text: &str, bold: bool) -> Token<'_> {
    if bold {
        Token::Bold(Cow::Borrowed(text))
    } else {
        Token::Plain(Cow::Borrowed(text))
    }
}
