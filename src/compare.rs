//! Comparison orchestration
//!
//! `compare` wires the pipeline together: input guards, optional
//! byte-order-mark stripping, the line-granularity edit script, chunk
//! assembly, and snippet classification. Whole-file creations and
//! deletions bypass the pipeline and come out as a single degenerate
//! chunk.

use crate::content;
use crate::engine::{self, TimeBudget};
use crate::error::{DiffError, DiffResult};
use crate::model::{ChangeRange, Chunk, ChunkRange, Diff, FileTag, Header, Line, Snippet};
use crate::patch::{assembler, classifier};
use derive_new::new;
use tracing::debug;

/// Format tag stamped on diffs produced by `compare`
const GENERATED_FORMAT: &str = "generated";

/// How leading byte-order-marks participate in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BomMode {
    /// A BOM is content like any other and shows up in the diff
    #[default]
    Include,
    /// A recognized leading BOM is stripped from each side first
    Ignore,
}

/// Tuning for one comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Unchanged lines kept around each change
    pub context_size: usize,
    pub bom_mode: BomMode,
    /// Wall-clock allowance for the edit-script search; use
    /// `TimeBudget::unlimited()` for deterministic output
    pub time_budget: TimeBudget,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            context_size: 3,
            bom_mode: BomMode::Include,
            time_budget: TimeBudget::from_millis(1000),
        }
    }
}

/// One side of a comparison: a name plus content, or nothing when the
/// file does not exist on that side
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct FileVersion<'c> {
    name: &'c str,
    content: Option<&'c str>,
}

impl<'c> FileVersion<'c> {
    pub fn present(name: &'c str, content: &'c str) -> Self {
        Self::new(name, Some(content))
    }

    pub fn absent(name: &'c str) -> Self {
        Self::new(name, None)
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn content(&self) -> Option<&str> {
        self.content
    }
}

/// Compare two versions of a document into a diff
pub fn compare(
    original: FileVersion<'_>,
    modified: FileVersion<'_>,
    options: &CompareOptions,
) -> DiffResult<Diff> {
    for side in [&original, &modified] {
        if side.content.is_some_and(content::is_binary) {
            return Err(DiffError::binary_content(side.name));
        }
    }

    let left = original.content.map(|text| normalized(text, options.bom_mode));
    let right = modified.content.map(|text| normalized(text, options.bom_mode));

    let header = |is_new_file: bool, is_deletion: bool| {
        Header::new(
            GENERATED_FORMAT,
            FileTag::new('a', original.name),
            FileTag::new('b', modified.name),
            is_new_file,
            is_deletion,
        )
    };

    let chunks = match (left, right) {
        (None, None) => {
            return Err(DiffError::invalid_input(
                "cannot compare two absent files",
            ));
        }
        (None, Some(created)) => return Ok(Diff::new(header(true, false), whole_file_addition(created))),
        (Some(deleted), None) => return Ok(Diff::new(header(false, true), whole_file_subtraction(deleted))),
        (Some(left), Some(right)) if left == right => Vec::new(),
        (Some(left), Some(right)) => {
            let a_lines = content::split_lines(left);
            let b_lines = content::split_lines(right);
            let script = engine::diff_lines(&a_lines, &b_lines, options.time_budget);
            let drafts = assembler::assemble(&script, options.context_size);
            debug!(chunks = drafts.len(), "assembled comparison");
            drafts
                .into_iter()
                .map(|draft| {
                    let snippets = classifier::classify(&draft.ops, options.time_budget);
                    Chunk::new(draft.range, snippets)
                })
                .collect()
        }
    };

    Ok(Diff::new(header(false, false), chunks))
}

fn normalized(text: &str, mode: BomMode) -> &str {
    match mode {
        BomMode::Include => text,
        BomMode::Ignore => content::strip_bom(text),
    }
}

/// The whole file sprang into existence: one chunk, nothing on the
/// original side
fn whole_file_addition(created: &str) -> Vec<Chunk> {
    let lines = content::split_lines(created);
    let range = ChunkRange::new(
        ChangeRange::new(0, 0),
        ChangeRange::new(1, lines.len()),
    );
    let snippet = Snippet::Addition {
        lines: lines.into_iter().map(Line::added).collect(),
    };
    vec![Chunk::new(range, vec![snippet])]
}

/// The whole file vanished: one chunk, nothing on the modified side
fn whole_file_subtraction(deleted: &str) -> Vec<Chunk> {
    let lines = content::split_lines(deleted);
    let range = ChunkRange::new(
        ChangeRange::new(1, lines.len()),
        ChangeRange::new(0, 0),
    );
    let snippet = Snippet::Subtraction {
        lines: lines.into_iter().map(Line::removed).collect(),
    };
    vec![Chunk::new(range, vec![snippet])]
}
