//! Builder API for restoring a document from known blocks.
//!
//! # Example
//!
//! ```rust
//! use blockpad::{BlockKind, DocumentBuilder};
//!
//! let doc = DocumentBuilder::new()
//!     .block(BlockKind::Plain, "Shopping")
//!     .block(BlockKind::Bullet, "- milk\n- eggs")
//!     .focus(1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(doc.block_count(), 2);
//! ```

use crate::engine::{Document, DocumentSnapshot};
use crate::error::ValidationError;
use crate::model::{Block, BlockKind};
use crate::options::Options;
use crate::validate::{validate_document, validate_options};

/// Builder for constructing a [`Document`] with explicit blocks.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    blocks: Vec<Block>,
    focus: usize,
    options: Options,
}

impl DocumentBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the markers used by the built document.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Appends a block with a fresh ID.
    pub fn block(mut self, kind: BlockKind, content: impl Into<String>) -> Self {
        self.blocks.push(Block::with_content(kind, content));
        self
    }

    /// Appends an existing block, keeping its ID.
    pub fn existing(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Appends several existing blocks.
    pub fn blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    /// Sets the focus index.
    pub fn focus(mut self, focus: usize) -> Self {
        self.focus = focus;
        self
    }

    /// Builds the document after validating blocks, focus and options.
    ///
    /// With no blocks the result is the same as [`Document::new`].
    pub fn build(self) -> Result<Document, ValidationError> {
        validate_options(&self.options)?;

        if self.blocks.is_empty() {
            if self.focus != 0 {
                return Err(ValidationError::FocusOutOfBounds { focus: self.focus, len: 1 });
            }
            return Document::with_options(self.options);
        }

        let snapshot = DocumentSnapshot {
            blocks: self.blocks,
            focus: self.focus,
        };
        validate_document(&snapshot)?;
        Ok(Document::from_parts(snapshot.blocks, snapshot.focus, self.options))
    }
}

impl Document {
    /// Restores a document from a snapshot, e.g. one taken earlier with
    /// [`Document::snapshot`].
    pub fn from_snapshot(snapshot: DocumentSnapshot, options: Options) -> Result<Self, ValidationError> {
        DocumentBuilder::new()
            .options(options)
            .blocks(snapshot.blocks)
            .focus(snapshot.focus)
            .build()
    }
}
