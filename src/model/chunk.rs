//! Change regions and their dual-coordinate ranges

use crate::model::snippet::Snippet;
use derive_new::new;

/// Affected region on one side of a chunk
///
/// `start_line` is 1-indexed; it is 0 only for an insert or delete at the
/// very start of a file with no kept lines on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ChangeRange {
    pub start_line: usize,
    pub lines_affected: usize,
}

/// The pair of ranges a chunk affects, one per side
///
/// Both sides are always present, even when one of them affects no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ChunkRange {
    pub original: ChangeRange,
    pub new: ChangeRange,
}

/// One contiguous, context-bounded change region
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Chunk {
    range: ChunkRange,
    snippets: Vec<Snippet>,
}

impl Chunk {
    pub fn range(&self) -> &ChunkRange {
        &self.range
    }

    pub fn original_range(&self) -> &ChangeRange {
        &self.range.original
    }

    pub fn new_range(&self) -> &ChangeRange {
        &self.range.new
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Total lines the snippets contribute to the original side
    pub fn original_line_count(&self) -> usize {
        self.snippets
            .iter()
            .map(|snippet| snippet.original_lines().len())
            .sum()
    }

    /// Total lines the snippets contribute to the modified side
    pub fn modified_line_count(&self) -> usize {
        self.snippets
            .iter()
            .map(|snippet| snippet.modified_lines().len())
            .sum()
    }
}
