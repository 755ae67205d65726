//! Inline tokens produced by the lexer.

use std::borrow::Cow;

/// A typed, contiguous run of inline text.
///
/// Tokens borrow from the lexed input; call [`Token::into_owned`] to keep
/// one past the input's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "text", rename_all = "snake_case"))]
pub enum Token<'a> {
    /// Text outside a bold span.
    Plain(Cow<'a, str>),
    /// Text between an opening and a closing delimiter.
    Bold(Cow<'a, str>),
}

impl<'a> Token<'a> {
    /// Returns the token's text.
    pub fn text(&self) -> &str {
        match self {
            Token::Plain(text) | Token::Bold(text) => text,
        }
    }

    /// Returns true for a bold run.
    pub fn is_bold(&self) -> bool {
        matches!(self, Token::Bold(_))
    }

    /// Converts into a token that owns its text.
    pub fn into_owned(self) -> Token<'static> {
        match self {
            Token::Plain(text) => Token::Plain(Cow::Owned(text.into_owned())),
            Token::Bold(text) => Token::Bold(Cow::Owned(text.into_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_kind() {
        let plain = Token::Plain(Cow::Borrowed("a"));
        let bold = Token::Bold(Cow::Borrowed("b"));
        assert_eq!(plain.text(), "a");
        assert!(!plain.is_bold());
        assert_eq!(bold.text(), "b");
        assert!(bold.is_bold());
    }

    #[test]
    fn test_into_owned() {
        let owned = {
            let input = String::from("bold");
            Token::Bold(Cow::Borrowed(input.as_str())).into_owned()
        };
        assert_eq!(owned, Token::Bold(Cow::Owned("bold".to_string())));
    }
}
