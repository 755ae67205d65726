//! Block segmentation engine.
//!
//! A [`Document`] owns an ordered list of blocks and applies edit commands
//! to them:
//! - typing replaces a block's content, promoting it to a bullet when it
//!   starts with the bullet marker
//! - Enter splits a plain block, or adds a bullet line inside a bullet block
//! - Enter on an empty bullet leaves bullet mode and splits
//!
//! Every accepted command returns an [`Applied`] listing its [`Change`]s and
//! the focus index.

pub mod builder;
pub mod command;
pub mod document;
pub mod snapshot;

pub use builder::DocumentBuilder;
pub use command::{Applied, Change, Command};
pub use document::Document;
pub use snapshot::DocumentSnapshot;
