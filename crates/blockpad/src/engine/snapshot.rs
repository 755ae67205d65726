//! Immutable document snapshots.

use sha2::{Digest, Sha256};

use crate::model::{Block, BlockId, BlockKind};

/// An owned copy of the document state handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentSnapshot {
    /// Blocks in document order.
    pub blocks: Vec<Block>,
    /// Block the renderer should focus.
    pub focus: usize,
}

impl DocumentSnapshot {
    /// Iterates `(id, kind, content)` in document order.
    pub fn entries(&self) -> impl Iterator<Item = (BlockId, BlockKind, &str)> + '_ {
        self.blocks
            .iter()
            .map(|block| (block.id, block.kind, block.content.as_str()))
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if there are no blocks (never the case for a live document).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Computes a 16-byte digest of ids, kinds, contents and focus.
    ///
    /// ```text
    /// fingerprint = SHA-256(for each block: id || kind || len(content) || content, then focus)[0:16]
    /// ```
    ///
    /// Two snapshots with equal fingerprints describe the same document, so a
    /// renderer can compare against its own view without walking every block.
    pub fn fingerprint(&self) -> [u8; 16] {
        let mut hasher = Sha256::new();
        for block in &self.blocks {
            hasher.update(block.id.as_bytes());
            hasher.update([kind_byte(block.kind)]);
            hasher.update((block.content.len() as u64).to_le_bytes());
            hasher.update(block.content.as_bytes());
        }
        hasher.update((self.focus as u64).to_le_bytes());
        let hash = hasher.finalize();

        let mut out = [0u8; 16];
        out.copy_from_slice(&hash[..16]);
        out
    }
}

fn kind_byte(kind: BlockKind) -> u8 {
    match kind {
        BlockKind::Plain => 0,
        BlockKind::Bullet => 1,
    }
}
