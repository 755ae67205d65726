//! Commands issued by the renderer and the changes they produce.

use crate::model::{BlockId, BlockKind};

/// An edit command addressed to one block by index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Command {
    /// The block's full text after one keystroke-level edit.
    ///
    /// Content ending in `'\n'` is handled as [`Command::LineBreak`].
    UpdateContent { index: usize, content: String },
    /// Enter was pressed; `content` is the reported text, usually with a
    /// trailing `'\n'`.
    LineBreak { index: usize, content: String },
    /// The keyboard's done action: Enter on the block's current content.
    Commit { index: usize },
}

impl Command {
    /// Returns the block index this command targets.
    pub fn index(&self) -> usize {
        match self {
            Command::UpdateContent { index, .. }
            | Command::LineBreak { index, .. }
            | Command::Commit { index } => *index,
        }
    }
}

/// A single observable effect of an applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "change", rename_all = "snake_case"))]
pub enum Change {
    /// The block at `index` now has this kind and content.
    ContentChanged {
        index: usize,
        id: BlockId,
        kind: BlockKind,
        content: String,
    },
    /// A new empty plain block was inserted at `index`.
    BlockInserted { index: usize, id: BlockId },
    /// The renderer should focus the block at `index`.
    FocusMoved { index: usize },
}

/// Result of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Applied {
    /// Changes in the order they happened.
    pub changes: Vec<Change>,
    /// Focus index after the command.
    pub focus: usize,
}

impl Applied {
    /// Index of the block inserted by a split, if any.
    pub fn inserted(&self) -> Option<usize> {
        self.changes.iter().find_map(|change| match change {
            Change::BlockInserted { index, .. } => Some(*index),
            _ => None,
        })
    }
}
