//! blockpad: core of a block-based rich-text editor.
//!
//! This crate holds the text logic of the editor. Rendering, focus and
//! keyboard handling belong to the caller, which feeds raw input in and gets
//! structured blocks and tokens back.
//!
//! # Overview
//!
//! Two independent pieces:
//! - **Block segmentation**: a [`Document`] of plain and bullet blocks that
//!   split on Enter and turn into bullets when a line starts with `"- "`
//! - **Inline lexing**: [`lex`] splits text on `*` into plain and bold runs
//!
//! # Quick Start
//!
//! ```rust
//! use blockpad::{lex, BlockKind, Document, Token};
//!
//! let mut doc = Document::new();
//! doc.update_block_content(0, "hello").unwrap();
//!
//! // Enter splits a plain block and moves focus to the new one
//! let applied = doc.update_block_content(0, "hello\n").unwrap();
//! assert_eq!(applied.focus, 1);
//! assert_eq!(doc.block_count(), 2);
//!
//! // A leading "- " makes a bullet; Enter adds a bullet line in place
//! doc.update_block_content(1, "- milk").unwrap();
//! doc.update_block_content(1, "- milk\n").unwrap();
//! assert_eq!(doc.blocks()[1].kind, BlockKind::Bullet);
//! assert_eq!(doc.blocks()[1].content, "- milk\n- ");
//!
//! let tokens = lex("Type *bold* text here");
//! assert_eq!(tokens.len(), 3);
//! assert!(matches!(&tokens[1], Token::Bold(text) if text == "bold"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (BlockId, Block, Token)
//! - [`engine`]: Block segmentation engine, commands and snapshots
//! - [`lex`]: Inline bold lexer
//! - [`validate`]: Invariant checks for outside state
//! - [`options`]: Bullet marker and delimiter settings
//! - [`error`]: Error types
//!
//! # Logging
//!
//! The engine logs through the [`log`] facade: applied edits at `debug`,
//! out-of-range indices at `warn`. Install any logger to see them.

pub mod engine;
pub mod error;
pub mod lex;
pub mod model;
pub mod options;
pub mod validate;

// Re-export commonly used types at crate root
pub use engine::{Applied, Change, Command, Document, DocumentBuilder, DocumentSnapshot};
pub use error::{EditError, ErrorCode, ValidationError};
pub use lex::{lex, lex_with, render};
pub use model::{format_id, parse_id, Block, BlockId, BlockKind, Token};
pub use options::Options;
pub use validate::{validate_document, validate_options};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
