//! Error types for the block engine and document validation.

use thiserror::Error;

use crate::model::BlockId;

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Block index out of bounds
    IndexOutOfBounds,
    /// E101: Document has no blocks
    EmptyDocument,
    /// E102: Two blocks share an ID
    DuplicateId,
    /// E103: Stored content ends with a line break
    TrailingLineBreak,
    /// E104: Unusable bullet marker or delimiter
    InvalidOptions,
    /// E105: Focus index out of bounds
    FocusOutOfBounds,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::IndexOutOfBounds => "E001",
            ErrorCode::EmptyDocument => "E101",
            ErrorCode::DuplicateId => "E102",
            ErrorCode::TrailingLineBreak => "E103",
            ErrorCode::InvalidOptions => "E104",
            ErrorCode::FocusOutOfBounds => "E105",
        }
    }
}

/// Error returned by a document operation.
///
/// The renderer's view of the block list has drifted from the engine's.
/// The document is left untouched; re-read [`crate::Document::snapshot`]
/// to resynchronize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("[E001] block index {index} out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl EditError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EditError::IndexOutOfBounds { .. } => ErrorCode::IndexOutOfBounds,
        }
    }
}

/// Error during document validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("[E101] document has no blocks")]
    EmptyDocument,

    #[error("[E102] block id {id} appears at {first} and {second}")]
    DuplicateId {
        id: BlockId,
        first: usize,
        second: usize,
    },

    #[error("[E103] block {index} content ends with a line break")]
    TrailingLineBreak { index: usize },

    #[error("[E104] invalid options: {reason}")]
    InvalidOptions { reason: &'static str },

    #[error("[E105] focus index {focus} out of bounds (len: {len})")]
    FocusOutOfBounds { focus: usize, len: usize },
}

impl ValidationError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyDocument => ErrorCode::EmptyDocument,
            ValidationError::DuplicateId { .. } => ErrorCode::DuplicateId,
            ValidationError::TrailingLineBreak { .. } => ErrorCode::TrailingLineBreak,
            ValidationError::InvalidOptions { .. } => ErrorCode::InvalidOptions,
            ValidationError::FocusOutOfBounds { .. } => ErrorCode::FocusOutOfBounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = EditError::IndexOutOfBounds { index: 3, len: 1 };
        assert_eq!(err.code().code(), "E001");
        assert_eq!(err.to_string(), "[E001] block index 3 out of bounds (len: 1)");

        assert_eq!(ValidationError::EmptyDocument.code().code(), "E101");
        assert_eq!(
            ValidationError::FocusOutOfBounds { focus: 2, len: 2 }.code(),
            ErrorCode::FocusOutOfBounds
        );
    }
}
