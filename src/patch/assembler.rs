//! Chunk assembly from a line-granularity edit script
//!
//! The assembler walks the script with one cursor per side, turns each
//! maximal non-Equal run into a change, and wraps changes in up to
//! `context_size` lines of unchanged context. A change landing within
//! `context_size` lines of the previous chunk's trailing edge continues
//! that chunk instead of opening a new one, so nearby changes share a
//! single chunk.
//!
//! Output is content only: flat per-line operations plus the chunk's
//! dual ranges. Snippet typing and inline highlighting happen later, in
//! the classifier.

use crate::engine::edit::{Edit, EditKind};
use crate::model::{ChangeRange, ChunkRange};
use derive_new::new;
use tracing::trace;

/// One line-level operation inside a chunk draft
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LineOp {
    pub kind: EditKind,
    #[new(into)]
    pub text: String,
}

/// A chunk before snippet classification: ranges plus raw line ops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkDraft {
    pub range: ChunkRange,
    pub ops: Vec<LineOp>,
}

/// One maximal non-Equal run, located on both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Change {
    start_a: usize,
    start_b: usize,
    deleted: usize,
    inserted: usize,
}

/// Group a line-level edit script into context-bounded chunk drafts
pub fn assemble(script: &[Edit<String>], context_size: usize) -> Vec<ChunkDraft> {
    let a_lines = side_lines(script, EditKind::Delete);
    let b_lines = side_lines(script, EditKind::Insert);
    let changes = locate_changes(script);

    let mut drafts: Vec<ChunkDraft> = Vec::new();
    let mut current: Option<(usize, usize, Vec<LineOp>)> = None;

    for (index, change) in changes.iter().enumerate() {
        let next = changes.get(index + 1);
        let continuation = current.is_some();

        let (start_a, start_b, ops) = current.get_or_insert((
            change.start_a,
            change.start_b,
            Vec::new(),
        ));

        if !continuation && change.start_a != 0 {
            // Leading context, clamped near the file start.
            let leading = context_size.min(change.start_a);
            *start_a = change.start_a - leading;
            *start_b = change.start_b - leading;
            for line in &b_lines[change.start_b - leading..change.start_b] {
                ops.push(LineOp::new(EditKind::Equal, line.as_str()));
            }
        }

        for line in &a_lines[change.start_a..change.start_a + change.deleted] {
            ops.push(LineOp::new(EditKind::Delete, line.as_str()));
        }
        for line in &b_lines[change.start_b..change.start_b + change.inserted] {
            ops.push(LineOp::new(EditKind::Insert, line.as_str()));
        }

        let after = change.start_b + change.inserted;
        match next {
            // A next change closer than two context windows would need
            // leading context overlapping this chunk's trailing context;
            // the whole gap becomes interior context of one chunk instead,
            // keeping chunk ranges disjoint.
            Some(next) if next.start_b - after < 2 * context_size => {
                for line in &b_lines[after..next.start_b] {
                    ops.push(LineOp::new(EditKind::Equal, line.as_str()));
                }
                trace!(chunk = drafts.len(), "merging adjacent change into open chunk");
            }
            // Trailing context runs to the context bound or the end of
            // the file, whichever comes first.
            _ => {
                let end = (after + context_size).min(b_lines.len());
                for line in &b_lines[after..end] {
                    ops.push(LineOp::new(EditKind::Equal, line.as_str()));
                }
                let (start_a, start_b, ops) = current.take().unwrap_or((0, 0, Vec::new()));
                drafts.push(seal(start_a, start_b, ops));
            }
        }
    }

    if let Some((start_a, start_b, ops)) = current.take() {
        drafts.push(seal(start_a, start_b, ops));
    }

    drafts
}

/// Close a draft: count each side's lines and convert to 1-indexed ranges
fn seal(start_a: usize, start_b: usize, ops: Vec<LineOp>) -> ChunkDraft {
    let original_len = ops
        .iter()
        .filter(|op| op.kind != EditKind::Insert)
        .count();
    let new_len = ops
        .iter()
        .filter(|op| op.kind != EditKind::Delete)
        .count();

    ChunkDraft {
        range: ChunkRange::new(
            side_range(start_a, original_len),
            side_range(start_b, new_len),
        ),
        ops,
    }
}

/// 1-indexed range for one side; a side with no lines at the very top of
/// the file reports start 0
fn side_range(start: usize, len: usize) -> ChangeRange {
    if len == 0 && start == 0 {
        ChangeRange::new(0, 0)
    } else {
        ChangeRange::new(start + 1, len)
    }
}

/// All lines belonging to one side: Equal plus that side's own kind
fn side_lines(script: &[Edit<String>], own: EditKind) -> Vec<String> {
    script
        .iter()
        .filter(|edit| edit.kind() == EditKind::Equal || edit.kind() == own)
        .flat_map(|edit| edit.run().iter().cloned())
        .collect()
}

/// Locate each maximal non-Equal run with both sides' cursors
fn locate_changes(script: &[Edit<String>]) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut a_pos = 0usize;
    let mut b_pos = 0usize;
    let mut open: Option<Change> = None;

    for edit in script {
        match edit.kind() {
            EditKind::Equal => {
                if let Some(change) = open.take() {
                    changes.push(change);
                }
                a_pos += edit.len();
                b_pos += edit.len();
            }
            EditKind::Delete => {
                let change = open.get_or_insert(Change {
                    start_a: a_pos,
                    start_b: b_pos,
                    deleted: 0,
                    inserted: 0,
                });
                change.deleted += edit.len();
                a_pos += edit.len();
            }
            EditKind::Insert => {
                let change = open.get_or_insert(Change {
                    start_a: a_pos,
                    start_b: b_pos,
                    deleted: 0,
                    inserted: 0,
                });
                change.inserted += edit.len();
                b_pos += edit.len();
            }
        }
    }
    if let Some(change) = open.take() {
        changes.push(change);
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn op(kind: EditKind, text: &str) -> LineOp {
        LineOp::new(kind, text)
    }

    #[test]
    fn nearby_changes_share_one_chunk() {
        // Insert at the top plus an insert three lines in, context 3:
        // the trailing window of the first change reaches the second.
        let script = vec![
            Edit::insert(lines(&["zero"])),
            Edit::equal(lines(&["one", "two", "three"])),
            Edit::insert(lines(&["three.5"])),
            Edit::equal(lines(&["four", "five", "six", "seven", "eight", "nine", "ten"])),
        ];
        let drafts = assemble(&script, 3);

        assert_eq!(drafts.len(), 1);
        let draft = &drafts[0];
        assert_eq!(draft.range.original, ChangeRange::new(1, 6));
        assert_eq!(draft.range.new, ChangeRange::new(1, 8));
        assert_eq!(
            draft.ops,
            vec![
                op(EditKind::Insert, "zero"),
                op(EditKind::Equal, "one"),
                op(EditKind::Equal, "two"),
                op(EditKind::Equal, "three"),
                op(EditKind::Insert, "three.5"),
                op(EditKind::Equal, "four"),
                op(EditKind::Equal, "five"),
                op(EditKind::Equal, "six"),
            ]
        );
    }

    #[test]
    fn changes_closer_than_two_windows_share_one_chunk() {
        // A gap of four equal lines with context 3: split chunks would
        // need overlapping context, so the gap becomes interior context.
        let script = vec![
            Edit::equal(lines(&["a"])),
            Edit::delete(lines(&["old1"])),
            Edit::insert(lines(&["new1"])),
            Edit::equal(lines(&["b", "c", "d", "e"])),
            Edit::delete(lines(&["old2"])),
            Edit::insert(lines(&["new2"])),
            Edit::equal(lines(&["f"])),
        ];
        let drafts = assemble(&script, 3);

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].range.original, ChangeRange::new(1, 8));
        assert_eq!(drafts[0].range.new, ChangeRange::new(1, 8));
        let interior: Vec<&str> = drafts[0]
            .ops
            .iter()
            .filter(|op| op.kind == EditKind::Equal)
            .map(|op| op.text.as_str())
            .collect();
        assert_eq!(interior, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn insert_at_the_top_without_context_reports_a_zero_start() {
        let script = vec![
            Edit::insert(lines(&["new"])),
            Edit::equal(lines(&["only"])),
        ];
        let drafts = assemble(&script, 0);

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].range.original, ChangeRange::new(0, 0));
        assert_eq!(drafts[0].range.new, ChangeRange::new(1, 1));
    }

    #[test]
    fn distant_changes_split_into_two_chunks() {
        let script = vec![
            Edit::delete(lines(&["first"])),
            Edit::insert(lines(&["FIRST"])),
            Edit::equal(lines(&["a", "b", "c", "d", "e", "f", "g"])),
            Edit::delete(lines(&["last"])),
            Edit::insert(lines(&["LAST"])),
        ];
        let drafts = assemble(&script, 3);

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].range.original, ChangeRange::new(1, 4));
        assert_eq!(drafts[0].range.new, ChangeRange::new(1, 4));
        assert_eq!(drafts[1].range.original, ChangeRange::new(6, 4));
        assert_eq!(drafts[1].range.new, ChangeRange::new(6, 4));
    }

    #[test]
    fn leading_context_clamps_at_the_file_start() {
        let script = vec![
            Edit::equal(lines(&["only"])),
            Edit::delete(lines(&["gone"])),
        ];
        let drafts = assemble(&script, 3);

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].range.original, ChangeRange::new(1, 2));
        assert_eq!(drafts[0].range.new, ChangeRange::new(1, 1));
        assert_eq!(
            drafts[0].ops,
            vec![op(EditKind::Equal, "only"), op(EditKind::Delete, "gone")]
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn context_never_exceeds_the_window(#[case] context_size: usize) {
        let script = vec![
            Edit::equal(lines(&["a", "b", "c", "d", "e"])),
            Edit::insert(lines(&["new"])),
            Edit::equal(lines(&["f", "g", "h", "i", "j"])),
        ];
        let drafts = assemble(&script, context_size);

        assert_eq!(drafts.len(), 1);
        let equal_ops = drafts[0]
            .ops
            .iter()
            .filter(|op| op.kind == EditKind::Equal)
            .count();
        assert_eq!(equal_ops, context_size * 2);
    }

    #[test]
    fn an_unchanged_script_produces_no_chunks() {
        let script = vec![Edit::equal(lines(&["same"]))];
        assert_eq!(assemble(&script, 3), Vec::new());
    }
}
