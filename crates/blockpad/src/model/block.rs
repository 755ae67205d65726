//! Editable blocks.

use crate::model::BlockId;

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockKind {
    /// Free text.
    #[default]
    Plain,
    /// One or more bullet lines; content keeps each line's marker.
    Bullet,
}

impl BlockKind {
    /// Returns a short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Plain => "plain",
            BlockKind::Bullet => "bullet",
        }
    }
}

/// An independently editable unit of document text.
///
/// `content` holds exactly what the user typed, including the leading
/// bullet marker once the block is a bullet. It never ends with the
/// line break that produced a split.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Assigned at creation, never changes.
    pub id: BlockId,
    /// Plain or bullet.
    pub kind: BlockKind,
    /// Raw text.
    pub content: String,
}

impl Block {
    /// Creates an empty plain block with a fresh ID.
    pub fn new() -> Self {
        Self::with_content(BlockKind::Plain, "")
    }

    /// Creates a block of the given kind and content with a fresh ID.
    pub fn with_content(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            content: content.into(),
        }
    }

    /// Returns true if this is a bullet block.
    pub fn is_bullet(&self) -> bool {
        self.kind == BlockKind::Bullet
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}
