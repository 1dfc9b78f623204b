//! Replaying a diff against original content
//!
//! Application is pure text manipulation: the original content is split
//! into CRLF lines, each chunk positions a zero-indexed cursor from its
//! own new-side range, and the chunk's snippets replay against the line
//! buffer in order. Chunks apply strictly in ascending order and never
//! overlap, so each cursor depends only on its own chunk.

use crate::content;
use crate::model::{Diff, Snippet};
use derive_new::new;

/// A diff ready to be replayed against original content
#[derive(Debug, Clone, Copy, new)]
pub struct Patch<'d> {
    diff: &'d Diff,
}

impl Patch<'_> {
    /// Reconstruct the modified content from the original
    pub fn apply_to(&self, original: &str) -> String {
        let mut lines = content::split_lines(original);

        for chunk in self.diff.chunks() {
            let mut cursor = chunk.new_range().start_line.saturating_sub(1);

            for snippet in chunk.snippets() {
                match snippet {
                    Snippet::Addition { lines: added } => {
                        for line in added {
                            insert_line(&mut lines, &mut cursor, line.value());
                        }
                    }
                    Snippet::Subtraction { lines: removed } => {
                        // Later lines shift into place, so the cursor
                        // stays put.
                        for _ in removed {
                            remove_line(&mut lines, cursor);
                        }
                    }
                    Snippet::Context { lines: kept } => {
                        cursor += kept.len();
                    }
                    Snippet::Modification { original, modified } => {
                        for _ in original {
                            remove_line(&mut lines, cursor);
                        }
                        for line in modified {
                            insert_line(&mut lines, &mut cursor, line.value());
                        }
                    }
                }
            }
        }

        content::join_lines(&lines)
    }
}

fn insert_line(lines: &mut Vec<String>, cursor: &mut usize, value: &str) {
    let at = (*cursor).min(lines.len());
    lines.insert(at, value.to_string());
    *cursor = at + 1;
}

fn remove_line(lines: &mut Vec<String>, cursor: usize) {
    if cursor < lines.len() {
        lines.remove(cursor);
    }
}
