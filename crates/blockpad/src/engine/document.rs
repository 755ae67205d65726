//! The block segmentation engine.

use log::{debug, warn};

use crate::engine::{Applied, Change, Command, DocumentSnapshot};
use crate::error::{EditError, ValidationError};
use crate::model::{Block, BlockKind};
use crate::options::Options;
use crate::validate::validate_options;

/// An ordered list of editable blocks plus the focus index.
///
/// The document owns its blocks. Callers read them through [`Document::blocks`]
/// or [`Document::snapshot`] and change them only through the edit operations,
/// each of which reports what it did as an [`Applied`].
///
/// Invariants:
/// - there is always at least one block
/// - stored content never ends with `'\n'`
/// - `focus < block_count()`
#[derive(Debug, Clone)]
pub struct Document {
    blocks: Vec<Block>,
    focus: usize,
    options: Options,
}

impl Document {
    /// Creates a document with one empty plain block.
    pub fn new() -> Self {
        Self::from_parts(vec![Block::new()], 0, Options::default())
    }

    /// Creates a document with one empty plain block and custom markers.
    ///
    /// Fails if the markers could break the document invariants, see
    /// [`validate_options`].
    pub fn with_options(options: Options) -> Result<Self, ValidationError> {
        validate_options(&options)?;
        Ok(Self::from_parts(vec![Block::new()], 0, options))
    }

    /// Assembles a document from validated parts.
    pub(crate) fn from_parts(blocks: Vec<Block>, focus: usize, options: Options) -> Self {
        Self {
            blocks,
            focus,
            options,
        }
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the block at `index`.
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Number of blocks (at least one).
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Index of the block the renderer should focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Markers in effect.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns an owned copy of the current state.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            blocks: self.blocks.clone(),
            focus: self.focus,
        }
    }

    /// Applies a renderer command.
    pub fn apply(&mut self, command: Command) -> Result<Applied, EditError> {
        match command {
            Command::UpdateContent { index, content } => self.update_block_content(index, &content),
            Command::LineBreak { index, content } => self.handle_line_break(index, &content),
            Command::Commit { index } => self.commit(index),
        }
    }

    /// Replaces the content of the block at `index` after a single edit.
    ///
    /// Content starting with the bullet marker turns a plain block into a
    /// bullet. Content ending in `'\n'` is handed to
    /// [`Document::handle_line_break`] and the newline is not stored.
    pub fn update_block_content(&mut self, index: usize, new_content: &str) -> Result<Applied, EditError> {
        self.check_index(index)?;

        if new_content.ends_with('\n') {
            return self.handle_line_break(index, new_content);
        }

        let block = &mut self.blocks[index];
        block.kind = infer_kind(block.kind, new_content, &self.options);
        block.content.clear();
        block.content.push_str(new_content);

        debug!(
            "updated block {} ({}), {} bytes",
            index,
            block.kind.as_str(),
            block.content.len()
        );

        Ok(Applied {
            changes: vec![content_changed(index, block)],
            focus: self.focus,
        })
    }

    /// Handles Enter in the block at `index`.
    ///
    /// `reported_content` is the block's text as reported by the input surface,
    /// normally with the triggering `'\n'` at the end.
    ///
    /// - plain block: split, focus moves to the new block
    /// - bullet block holding only the marker: becomes plain, then split
    /// - any other bullet block: a new bullet line is appended in place
    pub fn handle_line_break(&mut self, index: usize, reported_content: &str) -> Result<Applied, EditError> {
        self.check_index(index)?;

        let content = reported_content.trim_end_matches('\n');
        let kind = infer_kind(self.blocks[index].kind, content, &self.options);

        let applied = match kind {
            BlockKind::Plain => self.split(index, content, BlockKind::Plain),
            BlockKind::Bullet if content.trim() == self.options.empty_bullet() => {
                debug!("empty bullet in block {}, leaving bullet mode", index);
                self.split(index, content, BlockKind::Plain)
            }
            BlockKind::Bullet => self.continue_bullet(index, content),
        };

        Ok(applied)
    }

    /// Handles the keyboard's done action on the block at `index`.
    ///
    /// Same as a line break on the block's current content.
    pub fn commit(&mut self, index: usize) -> Result<Applied, EditError> {
        self.check_index(index)?;
        let content = self.blocks[index].content.clone();
        self.handle_line_break(index, &content)
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        let len = self.blocks.len();
        if index >= len {
            warn!("block index {} out of bounds (len: {}), renderer is out of sync", index, len);
            return Err(EditError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    /// Stores `content` as `kind` at `index` and inserts an empty plain block after it.
    fn split(&mut self, index: usize, content: &str, kind: BlockKind) -> Applied {
        let block = &mut self.blocks[index];
        block.kind = kind;
        block.content.clear();
        block.content.push_str(content);
        let updated = content_changed(index, block);

        let inserted = Block::new();
        let id = inserted.id;
        let at = index + 1;
        self.blocks.insert(at, inserted);
        self.focus = at;

        debug!("split block {} into {}, {} blocks", index, at, self.blocks.len());

        Applied {
            changes: vec![
                updated,
                Change::BlockInserted { index: at, id },
                Change::FocusMoved { index: at },
            ],
            focus: self.focus,
        }
    }

    /// Appends a line break and a fresh bullet marker to the block at `index`.
    fn continue_bullet(&mut self, index: usize, content: &str) -> Applied {
        let marker = &self.options.bullet_marker;
        let block = &mut self.blocks[index];
        block.kind = BlockKind::Bullet;
        block.content.clear();
        block.content.reserve(content.len() + 1 + marker.len());
        block.content.push_str(content);
        block.content.push('\n');
        block.content.push_str(marker);

        debug!("continued bullet list in block {}", index);

        Applied {
            changes: vec![content_changed(index, block)],
            focus: self.focus,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Promotes to bullet on a leading marker; never demotes.
fn infer_kind(current: BlockKind, content: &str, options: &Options) -> BlockKind {
    if current != BlockKind::Bullet && content.starts_with(options.bullet_marker.as_str()) {
        BlockKind::Bullet
    } else {
        current
    }
}

fn content_changed(index: usize, block: &Block) -> Change {
    Change::ContentChanged {
        index,
        id: block.id,
        kind: block.kind,
        content: block.content.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DocumentBuilder;
    use crate::validate::validate_document;
    use proptest::prelude::*;

    fn kinds_and_contents(doc: &Document) -> Vec<(BlockKind, &str)> {
        doc.blocks()
            .iter()
            .map(|b| (b.kind, b.content.as_str()))
            .collect()
    }

    fn bullet_doc(content: &str) -> Document {
        DocumentBuilder::new()
            .block(BlockKind::Bullet, content)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_document() {
        let doc = Document::new();
        assert_eq!(doc.block_count(), 1);
        assert_eq!(kinds_and_contents(&doc), vec![(BlockKind::Plain, "")]);
        assert_eq!(doc.focus(), 0);
    }

    #[test]
    fn test_update_plain_content() {
        let mut doc = Document::new();
        let id = doc.blocks()[0].id;
        let applied = doc.update_block_content(0, "hello").unwrap();

        assert_eq!(kinds_and_contents(&doc), vec![(BlockKind::Plain, "hello")]);
        assert_eq!(
            applied.changes,
            vec![Change::ContentChanged {
                index: 0,
                id,
                kind: BlockKind::Plain,
                content: "hello".to_string(),
            }]
        );
        assert_eq!(applied.focus, 0);
        assert_eq!(applied.inserted(), None);
    }

    #[test]
    fn test_bullet_promotion() {
        let mut doc = Document::new();
        doc.update_block_content(0, "- item").unwrap();
        assert_eq!(kinds_and_contents(&doc), vec![(BlockKind::Bullet, "- item")]);
    }

    #[test]
    fn test_dash_without_space_stays_plain() {
        let mut doc = Document::new();
        doc.update_block_content(0, "-item").unwrap();
        assert_eq!(doc.blocks()[0].kind, BlockKind::Plain);
    }

    #[test]
    fn test_bullet_never_demoted_by_update() {
        let mut doc = Document::new();
        doc.update_block_content(0, "- item").unwrap();
        doc.update_block_content(0, "-").unwrap();
        doc.update_block_content(0, "").unwrap();
        assert_eq!(kinds_and_contents(&doc), vec![(BlockKind::Bullet, "")]);
    }

    #[test]
    fn test_split_plain_block() {
        let mut doc = Document::new();
        doc.update_block_content(0, "hello").unwrap();
        let original = doc.blocks()[0].id;

        let applied = doc.handle_line_break(0, "hello\n").unwrap();

        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "hello"), (BlockKind::Plain, "")]
        );
        assert_eq!(doc.focus(), 1);
        assert_eq!(applied.focus, 1);
        assert_eq!(applied.inserted(), Some(1));
        assert_eq!(doc.blocks()[0].id, original);

        let inserted = doc.blocks()[1].id;
        assert_ne!(inserted, original);
        assert_eq!(
            applied.changes,
            vec![
                Change::ContentChanged {
                    index: 0,
                    id: original,
                    kind: BlockKind::Plain,
                    content: "hello".to_string(),
                },
                Change::BlockInserted { index: 1, id: inserted },
                Change::FocusMoved { index: 1 },
            ]
        );
    }

    #[test]
    fn test_update_with_trailing_newline_splits() {
        let mut doc = Document::new();
        doc.update_block_content(0, "hello\n").unwrap();
        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "hello"), (BlockKind::Plain, "")]
        );
        assert_eq!(doc.focus(), 1);
    }

    #[test]
    fn test_split_inserts_after_index() {
        let mut doc = DocumentBuilder::new()
            .block(BlockKind::Plain, "a")
            .block(BlockKind::Plain, "b")
            .block(BlockKind::Plain, "c")
            .build()
            .unwrap();
        let ids: Vec<_> = doc.blocks().iter().map(|b| b.id).collect();

        doc.handle_line_break(1, "b\n").unwrap();

        assert_eq!(
            kinds_and_contents(&doc),
            vec![
                (BlockKind::Plain, "a"),
                (BlockKind::Plain, "b"),
                (BlockKind::Plain, ""),
                (BlockKind::Plain, "c"),
            ]
        );
        assert_eq!(doc.blocks()[0].id, ids[0]);
        assert_eq!(doc.blocks()[1].id, ids[1]);
        assert_eq!(doc.blocks()[3].id, ids[2]);
        assert_eq!(doc.focus(), 2);
    }

    #[test]
    fn test_bullet_continuation() {
        let mut doc = bullet_doc("- item");
        let applied = doc.handle_line_break(0, "- item\n").unwrap();

        assert_eq!(kinds_and_contents(&doc), vec![(BlockKind::Bullet, "- item\n- ")]);
        assert_eq!(doc.focus(), 0);
        assert_eq!(applied.focus, 0);
        assert_eq!(applied.inserted(), None);
    }

    #[test]
    fn test_plain_block_with_marker_continues_as_bullet() {
        let mut doc = Document::new();
        doc.handle_line_break(0, "- item\n").unwrap();
        assert_eq!(kinds_and_contents(&doc), vec![(BlockKind::Bullet, "- item\n- ")]);
    }

    #[test]
    fn test_exit_bullet_guard() {
        let mut doc = bullet_doc("-");
        let applied = doc.handle_line_break(0, "-\n").unwrap();

        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "-"), (BlockKind::Plain, "")]
        );
        assert_eq!(doc.focus(), 1);
        assert_eq!(applied.inserted(), Some(1));
    }

    #[test]
    fn test_exit_bullet_guard_with_marker_space() {
        let mut doc = Document::new();
        doc.update_block_content(0, "- ").unwrap();
        doc.update_block_content(0, "- \n").unwrap();

        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "- "), (BlockKind::Plain, "")]
        );
    }

    #[test]
    fn test_second_bullet_line_does_not_trigger_guard() {
        let mut doc = bullet_doc("- item");
        doc.handle_line_break(0, "- item\n").unwrap();
        doc.handle_line_break(0, "- item\n- \n").unwrap();

        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Bullet, "- item\n- \n- ")]
        );
    }

    #[test]
    fn test_commit_uses_current_content() {
        let mut doc = Document::new();
        doc.update_block_content(0, "hello").unwrap();
        doc.commit(0).unwrap();
        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "hello"), (BlockKind::Plain, "")]
        );

        let mut bullets = bullet_doc("- a");
        bullets.commit(0).unwrap();
        assert_eq!(kinds_and_contents(&bullets), vec![(BlockKind::Bullet, "- a\n- ")]);
    }

    #[test]
    fn test_commit_on_empty_bullet_leaves_bullet_mode() {
        let mut doc = bullet_doc("-");
        let applied = doc.commit(0).unwrap();

        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "-"), (BlockKind::Plain, "")]
        );
        assert_eq!(applied.focus, 1);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut doc = Document::new();
        doc.apply(Command::UpdateContent { index: 0, content: "x".to_string() }).unwrap();
        doc.apply(Command::LineBreak { index: 0, content: "x\n".to_string() }).unwrap();
        doc.apply(Command::UpdateContent { index: 1, content: "- y".to_string() }).unwrap();
        doc.apply(Command::Commit { index: 1 }).unwrap();

        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "x"), (BlockKind::Bullet, "- y\n- ")]
        );
        assert_eq!(doc.focus(), 1);
    }

    #[test]
    fn test_out_of_range_leaves_document_unchanged() {
        let mut doc = Document::new();
        doc.update_block_content(0, "hello").unwrap();
        let before = doc.snapshot();

        let expected = Err(EditError::IndexOutOfBounds { index: 1, len: 1 });
        assert_eq!(doc.update_block_content(1, "x"), expected);
        assert_eq!(doc.handle_line_break(1, "x\n"), expected);
        assert_eq!(doc.commit(1), expected);
        assert_eq!(doc.update_block_content(1, "x\n"), expected);

        assert_eq!(doc.snapshot(), before);
    }

    #[test]
    fn test_custom_bullet_marker() {
        let options = Options {
            bullet_marker: "* ".to_string(),
            ..Options::default()
        };
        let mut doc = Document::with_options(options).unwrap();
        doc.update_block_content(0, "- not a bullet").unwrap();
        assert_eq!(doc.blocks()[0].kind, BlockKind::Plain);

        doc.update_block_content(0, "* a").unwrap();
        doc.handle_line_break(0, "* a\n").unwrap();
        assert_eq!(kinds_and_contents(&doc), vec![(BlockKind::Bullet, "* a\n* ")]);
    }

    #[test]
    fn test_with_options_rejects_unusable_markers() {
        let multiline = Options {
            bullet_marker: "-\n".to_string(),
            ..Options::default()
        };
        assert!(matches!(
            Document::with_options(multiline),
            Err(ValidationError::InvalidOptions { .. })
        ));

        let empty = Options {
            bullet_marker: String::new(),
            ..Options::default()
        };
        assert!(matches!(
            Document::with_options(empty),
            Err(ValidationError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn test_repeated_trailing_newlines_stripped() {
        let mut doc = Document::new();
        doc.handle_line_break(0, "a\n\n").unwrap();
        assert_eq!(
            kinds_and_contents(&doc),
            vec![(BlockKind::Plain, "a"), (BlockKind::Plain, "")]
        );
    }

    fn arb_command(max_index: usize) -> impl Strategy<Value = Command> {
        let content = "(- |-|a|b| |\n){0,4}";
        prop_oneof![
            (0..max_index, content).prop_map(|(index, content)| Command::UpdateContent { index, content }),
            (0..max_index, content).prop_map(|(index, content)| Command::LineBreak { index, content }),
            (0..max_index).prop_map(|index| Command::Commit { index }),
        ]
    }

    proptest! {
        #[test]
        fn prop_commands_preserve_invariants(commands in prop::collection::vec(arb_command(6), 0..40)) {
            let mut doc = Document::new();
            for command in commands {
                let before = doc.snapshot();
                let len = doc.block_count();
                match doc.apply(command.clone()) {
                    Ok(applied) => {
                        let grew = doc.block_count() - len;
                        prop_assert!(grew <= 1);
                        prop_assert_eq!(grew == 1, applied.inserted().is_some());
                        prop_assert_eq!(applied.focus, doc.focus());
                        for (old, new) in before.blocks.iter().zip(doc.blocks()) {
                            if old.id != new.id {
                                prop_assert_eq!(grew, 1);
                            }
                        }
                    }
                    Err(EditError::IndexOutOfBounds { index, len: reported }) => {
                        prop_assert_eq!(index, command.index());
                        prop_assert_eq!(reported, len);
                        prop_assert_eq!(doc.snapshot(), before);
                    }
                }
                prop_assert!(validate_document(&doc.snapshot()).is_ok());
            }
        }
    }
}
