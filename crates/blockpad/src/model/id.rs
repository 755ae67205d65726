//! Opaque block identifiers.
//!
//! Every block gets a random (v4) UUID when it is created. The ID never
//! changes and is never reused, so a renderer can key widgets by it even
//! as indices shift around a split.

use std::fmt;

use uuid::Uuid;

/// Unique identifier of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockId(Uuid);

impl BlockId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps raw UUID bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the raw 16 bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats as non-hyphenated lowercase hex.
impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Formats a block ID as non-hyphenated lowercase hex.
pub fn format_id(id: &BlockId) -> String {
    id.to_string()
}

/// Parses a block ID from hex (with or without hyphens).
pub fn parse_id(s: &str) -> Option<BlockId> {
    Uuid::parse_str(s).ok().map(BlockId)
}
