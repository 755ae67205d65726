//! Data model types.
//!
//! - Identifiers (UUIDs)
//! - Blocks (segmentation engine)
//! - Tokens (inline lexer)

pub mod block;
pub mod id;
pub mod token;

pub use block::{Block, BlockKind};
pub use id::{format_id, parse_id, BlockId};
pub use token::Token;
