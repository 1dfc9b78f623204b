//! Comparison atoms
//!
//! The engine is generic over the unit it compares: characters for inline
//! highlighting, whole lines for file comparison, or synthetic interned
//! ids standing in for lines during the core search. The only capability
//! beyond equality an atom contributes is seam scoring, which the lossless
//! boundary-shift cleanup uses to slide an edit onto the most natural
//! boundary between two runs.

use regex::Regex;
use std::hash::Hash;
use std::sync::LazyLock;

/// Best seam score: the edit lands flush against a run edge
pub(crate) const EDGE_SCORE: u32 = 5;

// A blank line next to the seam is the strongest interior signal. The
// patterns match a trailing or leading CR-tolerant empty line.
static BLANK_LINE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\r?\n$").expect("blank-line-end pattern"));
static BLANK_LINE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\r?\n\r?\n").expect("blank-line-start pattern"));

/// Unit of comparison for the edit-script engine
pub trait Atom: Clone + Eq + Hash {
    /// Scores how natural a cut between `one` and `two` is, from 0
    /// (interior of a word) to 5 (flush against a run edge). Atoms
    /// without boundary semantics keep the default edge-only scoring.
    fn seam_score(one: &[Self], two: &[Self]) -> u32 {
        if one.is_empty() || two.is_empty() {
            EDGE_SCORE
        } else {
            0
        }
    }
}

/// Interned line ids; scored after expansion back to real lines, so the
/// neutral default applies
impl Atom for u32 {}

impl Atom for char {
    fn seam_score(one: &[Self], two: &[Self]) -> u32 {
        let (Some(&before), Some(&after)) = (one.last(), two.first()) else {
            return EDGE_SCORE;
        };

        let mut score = 0;
        if !before.is_alphanumeric() || !after.is_alphanumeric() {
            score += 1;
            if before.is_whitespace() || after.is_whitespace() {
                score += 1;
                if before.is_control() || after.is_control() {
                    score += 1;
                    if ends_with_blank_line(one) || starts_with_blank_line(two) {
                        score += 1;
                    }
                }
            }
        }
        score
    }
}

impl Atom for String {
    fn seam_score(one: &[Self], two: &[Self]) -> u32 {
        let (Some(before), Some(after)) = (one.last(), two.first()) else {
            return EDGE_SCORE;
        };

        // A wholly blank line beside the seam is the line-granularity
        // analogue of the blank-line boundary.
        if before.trim().is_empty() || after.trim().is_empty() {
            return 4;
        }

        let last = before.chars().last();
        let first = after.chars().next();
        let mut score = 0;
        if last.is_none_or(|c| !c.is_alphanumeric()) || first.is_none_or(|c| !c.is_alphanumeric()) {
            score += 1;
            if last.is_some_and(char::is_whitespace) || first.is_some_and(char::is_whitespace) {
                score += 1;
                if last.is_some_and(char::is_control) || first.is_some_and(char::is_control) {
                    score += 1;
                }
            }
        }
        score
    }
}

fn ends_with_blank_line(run: &[char]) -> bool {
    let tail_start = run.len().saturating_sub(3);
    let tail: String = run[tail_start..].iter().collect();
    BLANK_LINE_END.is_match(&tail)
}

fn starts_with_blank_line(run: &[char]) -> bool {
    let head: String = run.iter().take(4).collect();
    BLANK_LINE_START.is_match(&head)
}
