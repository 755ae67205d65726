//! Tunable markers for the engine and lexer.

/// Default bullet marker.
pub const DEFAULT_BULLET_MARKER: &str = "- ";

/// Default bold delimiter.
pub const DEFAULT_DELIMITER: char = '*';

/// Markers recognized by [`crate::Document`] and [`crate::lex::lex_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Prefix that turns a block into a bullet and starts each continuation line.
    pub bullet_marker: String,
    /// Character that toggles bold while lexing.
    pub delimiter: char,
}

impl Options {
    /// Creates the default options (`"- "` and `'*'`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Content that, once trimmed, means "empty bullet": Enter exits bullet mode.
    pub fn empty_bullet(&self) -> &str {
        self.bullet_marker.trim()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_marker: DEFAULT_BULLET_MARKER.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}
