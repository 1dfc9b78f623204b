//! Snippet classification of a chunk's raw operation stream
//!
//! Consecutive operations of the same mode buffer together; the buffer
//! becomes one typed snippet when the mode changes. A Delete run followed
//! immediately by an Insert run, with no context line between them, is a
//! modification rather than two separate snippets: its lines pair up
//! index-wise and each pair is re-diffed character by character for
//! inline highlighting.

use crate::engine::edit::EditKind;
use crate::engine::{self, TimeBudget};
use crate::model::{Line, Snippet, Span, SpanKind};
use crate::patch::assembler::LineOp;

/// Which side of a modification pair a span list is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Original,
    Modified,
}

/// Turn a chunk's flat operation stream into ordered typed snippets
pub fn classify(ops: &[LineOp], budget: TimeBudget) -> Vec<Snippet> {
    let mut snippets = Vec::new();
    let mut buffer: Vec<&LineOp> = Vec::new();
    let mut previous: Option<EditKind> = None;
    let mut is_modification = false;

    for op in ops {
        let mode = previous.unwrap_or(op.kind);
        if mode == EditKind::Delete && op.kind == EditKind::Insert {
            is_modification = true;
        } else if mode != op.kind {
            snippets.push(snippet_from(&buffer, mode, is_modification, budget));
            buffer.clear();
            is_modification = false;
        }
        buffer.push(op);
        previous = Some(op.kind);
    }

    if let Some(mode) = previous
        && !buffer.is_empty()
    {
        snippets.push(snippet_from(&buffer, mode, is_modification, budget));
    }

    snippets
}

/// Seal one buffered run as a snippet
///
/// `mode` is the kind seen before the transition that sealed the buffer:
/// for a flagged modification buffer that is the trailing Insert run, so
/// the deleted and inserted lines are picked out of the buffer by kind.
fn snippet_from(
    buffer: &[&LineOp],
    mode: EditKind,
    is_modification: bool,
    budget: TimeBudget,
) -> Snippet {
    if mode == EditKind::Equal {
        return Snippet::Context {
            lines: buffer
                .iter()
                .map(|op| Line::context(op.text.as_str()))
                .collect(),
        };
    }
    if is_modification {
        let originals: Vec<&str> = buffer
            .iter()
            .filter(|op| op.kind == EditKind::Delete)
            .map(|op| op.text.as_str())
            .collect();
        let modifieds: Vec<&str> = buffer
            .iter()
            .filter(|op| op.kind == EditKind::Insert)
            .map(|op| op.text.as_str())
            .collect();
        return modification(&originals, &modifieds, budget);
    }
    if mode == EditKind::Insert {
        return Snippet::Addition {
            lines: buffer
                .iter()
                .map(|op| Line::added(op.text.as_str()))
                .collect(),
        };
    }
    Snippet::Subtraction {
        lines: buffer
            .iter()
            .map(|op| Line::removed(op.text.as_str()))
            .collect(),
    }
}

/// Pair deleted and inserted lines by position and highlight each pair
///
/// Excess lines on the longer side have no partner; they carry one
/// full-line span of their own kind.
fn modification(originals: &[&str], modifieds: &[&str], budget: TimeBudget) -> Snippet {
    let mut original_lines = Vec::new();
    let mut modified_lines = Vec::new();

    for index in 0..originals.len().max(modifieds.len()) {
        match (originals.get(index), modifieds.get(index)) {
            (Some(original), None) => original_lines.push(Line::removed(*original)),
            (None, Some(modified)) => modified_lines.push(Line::added(*modified)),
            (Some(original), Some(modified)) => {
                let script = engine::diff_chars(original, modified, budget);
                original_lines.push(Line::from_spans(side_spans(&script, Side::Original)));
                modified_lines.push(Line::from_spans(side_spans(&script, Side::Modified)));
            }
            (None, None) => {}
        }
    }

    Snippet::Modification {
        original: original_lines,
        modified: modified_lines,
    }
}

/// Project a character script onto one side's spans
///
/// Each side keeps the shared material plus its own kind, so the spans
/// concatenate back to exactly that side's line.
fn side_spans(script: &engine::EditScript<char>, side: Side) -> Vec<Span> {
    script
        .iter()
        .filter_map(|edit| {
            let kind = match (edit.kind(), side) {
                (EditKind::Equal, _) => SpanKind::Equal,
                (EditKind::Delete, Side::Original) => SpanKind::Deletion,
                (EditKind::Insert, Side::Modified) => SpanKind::Addition,
                _ => return None,
            };
            let text: String = edit.run().iter().collect();
            Some(Span::new(text, kind))
        })
        .collect()
}
