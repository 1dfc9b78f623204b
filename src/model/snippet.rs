//! Typed, contiguous groups of lines within a chunk

use crate::model::span::Line;

/// One same-kind run of lines inside a chunk
///
/// The four kinds are closed: every line of a chunk belongs to exactly
/// one snippet, and consumers match exhaustively instead of inspecting
/// line types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snippet {
    /// Lines unchanged on both sides
    Context { lines: Vec<Line> },
    /// Lines present only on the modified side
    Addition { lines: Vec<Line> },
    /// Lines present only on the original side
    Subtraction { lines: Vec<Line> },
    /// A deletion run paired with the insertion run that replaced it,
    /// with inline highlighting on both sides
    Modification {
        original: Vec<Line>,
        modified: Vec<Line>,
    },
}

impl Snippet {
    /// Lines this snippet contributes to the original side
    pub fn original_lines(&self) -> &[Line] {
        match self {
            Snippet::Context { lines } | Snippet::Subtraction { lines } => lines,
            Snippet::Addition { .. } => &[],
            Snippet::Modification { original, .. } => original,
        }
    }

    /// Lines this snippet contributes to the modified side
    pub fn modified_lines(&self) -> &[Line] {
        match self {
            Snippet::Context { lines } | Snippet::Addition { lines } => lines,
            Snippet::Subtraction { .. } => &[],
            Snippet::Modification { modified, .. } => modified,
        }
    }
}
