//! Invariant checks for documents and options.
//!
//! A [`crate::Document`] upholds these on its own. The checks exist for
//! state that comes from outside: a snapshot handed back by a renderer, a
//! builder filled by hand, or options read from a config file.

use rustc_hash::FxHashMap;

use crate::engine::DocumentSnapshot;
use crate::error::ValidationError;
use crate::model::BlockId;
use crate::options::Options;

/// Validates a snapshot.
///
/// Checks:
/// - at least one block
/// - no two blocks share an ID
/// - no content ends with `'\n'`
/// - focus is in range
pub fn validate_document(snapshot: &DocumentSnapshot) -> Result<(), ValidationError> {
    if snapshot.blocks.is_empty() {
        return Err(ValidationError::EmptyDocument);
    }

    let mut seen: FxHashMap<BlockId, usize> =
        FxHashMap::with_capacity_and_hasher(snapshot.blocks.len(), Default::default());
    for (index, block) in snapshot.blocks.iter().enumerate() {
        if let Some(&first) = seen.get(&block.id) {
            return Err(ValidationError::DuplicateId {
                id: block.id,
                first,
                second: index,
            });
        }
        seen.insert(block.id, index);

        if block.content.ends_with('\n') {
            return Err(ValidationError::TrailingLineBreak { index });
        }
    }

    if snapshot.focus >= snapshot.blocks.len() {
        return Err(ValidationError::FocusOutOfBounds {
            focus: snapshot.focus,
            len: snapshot.blocks.len(),
        });
    }

    Ok(())
}

/// Validates markers.
///
/// The bullet marker must have visible text (its trimmed form is what an
/// empty bullet looks like) and must not contain a line break. The delimiter
/// must not be whitespace.
pub fn validate_options(options: &Options) -> Result<(), ValidationError> {
    if options.bullet_marker.trim().is_empty() {
        return Err(ValidationError::InvalidOptions {
            reason: "bullet marker is blank",
        });
    }
    if options.bullet_marker.contains('\n') {
        return Err(ValidationError::InvalidOptions {
            reason: "bullet marker contains a line break",
        });
    }
    if options.delimiter.is_whitespace() {
        return Err(ValidationError::InvalidOptions {
            reason: "delimiter is whitespace",
        });
    }
    Ok(())
}
