//! Minimal edit-script computation
//!
//! This module implements the bounded, bidirectional bisection search at
//! the heart of the engine, together with the speedups wrapped around it:
//!
//! - equal-input and empty-side base cases
//! - common prefix/suffix trimming, re-attached after the core runs
//! - containment: the shorter sequence found whole inside the longer one
//! - half-match: a shared run covering at least half of the longer input
//!   splits the problem in two, giving near-linear behavior when large
//!   unmodified regions exist
//! - the bisection core itself: forward and reverse frontiers growing
//!   per-diagonal furthest-reach arrays for an increasing error budget,
//!   spliced at the first overlap
//!
//! The search is governed by a wall-clock budget, checked once per error
//! round. Exhaustion degrades the result to a single Delete plus Insert,
//! which is always valid, never an error. Minimality is therefore
//! best-effort: an unlimited budget yields a minimal script, a tight one
//! may not.

use crate::engine::atom::Atom;
use crate::engine::cleanup;
use crate::engine::edit::{Edit, EditScript};
use derive_new::new;
use std::time::{Duration, Instant};
use tracing::debug;

/// Wall-clock allowance for one edit-script computation
///
/// The budget is converted to a deadline when the computation starts, and
/// every nested recursion shares that deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeBudget(Option<Duration>);

impl TimeBudget {
    /// No deadline; the search always runs to completion
    pub fn unlimited() -> Self {
        TimeBudget(None)
    }

    pub fn from_duration(allowance: Duration) -> Self {
        TimeBudget(Some(allowance))
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::from_duration(Duration::from_millis(millis))
    }

    fn deadline(&self) -> Option<Instant> {
        self.0.map(|allowance| Instant::now() + allowance)
    }
}

/// Algorithm seam: anything able to produce an edit script for two atom
/// sequences
pub trait DiffAlgorithm<T> {
    fn diff(&self) -> EditScript<T>;
}

/// Bounded bidirectional bisection over two atom slices
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Bisection<'d, T> {
    a: &'d [T],
    b: &'d [T],
    #[new(default)]
    budget: TimeBudget,
}

impl<T> Bisection<'_, T> {
    pub fn with_budget(mut self, budget: TimeBudget) -> Self {
        self.budget = budget;
        self
    }
}

impl<T: Atom> DiffAlgorithm<T> for Bisection<'_, T> {
    fn diff(&self) -> EditScript<T> {
        diff_slices(self.a, self.b, self.budget.deadline())
    }
}

/// Full computation for two slices sharing one deadline
pub(crate) fn diff_slices<T: Atom>(
    a: &[T],
    b: &[T],
    deadline: Option<Instant>,
) -> EditScript<T> {
    if a == b {
        if a.is_empty() {
            return Vec::new();
        }
        return vec![Edit::equal(a.to_vec())];
    }

    // Trim the common prefix and suffix; the core only sees the middle.
    let prefix = common_prefix_len(a, b);
    let suffix = common_suffix_len(&a[prefix..], &b[prefix..]);
    let core_a = &a[prefix..a.len() - suffix];
    let core_b = &b[prefix..b.len() - suffix];

    let mut script = compute(core_a, core_b, deadline);

    if prefix > 0 {
        script.insert(0, Edit::equal(a[..prefix].to_vec()));
    }
    if suffix > 0 {
        script.push(Edit::equal(a[a.len() - suffix..].to_vec()));
    }

    cleanup::merge(&mut script);
    script
}

/// Core computation once prefix and suffix are gone
fn compute<T: Atom>(a: &[T], b: &[T], deadline: Option<Instant>) -> EditScript<T> {
    if a.is_empty() {
        return vec![Edit::insert(b.to_vec())];
    }
    if b.is_empty() {
        return vec![Edit::delete(a.to_vec())];
    }

    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };
    if let Some(at) = find_subslice(longer, shorter) {
        // Shorter sequence contained whole in the longer one: the
        // surrounding material is one big insert or delete.
        let surround = |run: Vec<T>| {
            if a.len() > b.len() {
                Edit::delete(run)
            } else {
                Edit::insert(run)
            }
        };
        return vec![
            surround(longer[..at].to_vec()),
            Edit::equal(shorter.to_vec()),
            surround(longer[at + shorter.len()..].to_vec()),
        ];
    }

    if let Some(half) = half_match(a, b) {
        debug!(common = half.common.len(), "half-match split");
        let mut script = diff_slices(half.a_head, half.b_head, deadline);
        script.push(Edit::equal(half.common.to_vec()));
        script.extend(diff_slices(half.a_tail, half.b_tail, deadline));
        return script;
    }

    bisect(a, b, deadline)
}

/// Bidirectional frontier search
///
/// Two furthest-reach arrays, one per direction, indexed by diagonal
/// (consumed-a minus consumed-b, offset into the array). The forward
/// frontier walks from the starts, the reverse one from the ends; the
/// first overlap names a split point, and the two halves recurse
/// independently. Cost is bounded by the distance to convergence rather
/// than the total edit distance.
fn bisect<T: Atom>(a: &[T], b: &[T], deadline: Option<Instant>) -> EditScript<T> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max_d = ((a.len() + b.len() + 1) / 2) as isize;
    let v_offset = max_d;
    // One slot of headroom on each side keeps the k ± 1 reads in range
    // even for single-atom inputs.
    let v_length = (2 * max_d + 2) as usize;

    let mut v1 = vec![-1isize; v_length];
    let mut v2 = vec![-1isize; v_length];
    v1[(v_offset + 1) as usize] = 0;
    v2[(v_offset + 1) as usize] = 0;

    let delta = n - m;
    // With an odd delta the frontiers can only meet while stepping the
    // forward one; with an even delta only while stepping the reverse.
    let front = delta % 2 != 0;

    // Trimmed diagonal windows, grown when a frontier runs off an end.
    let mut k1_start = 0isize;
    let mut k1_end = 0isize;
    let mut k2_start = 0isize;
    let mut k2_end = 0isize;

    for d in 0..max_d {
        if deadline.is_some_and(|limit| Instant::now() > limit) {
            debug!(round = d, "bisection budget exhausted, degrading");
            break;
        }

        // Forward frontier.
        let mut k1 = -d + k1_start;
        while k1 <= d - k1_end {
            let k1_offset = (v_offset + k1) as usize;
            let mut x1 = if k1 == -d || (k1 != d && v1[k1_offset - 1] < v1[k1_offset + 1]) {
                v1[k1_offset + 1]
            } else {
                v1[k1_offset - 1] + 1
            };
            let mut y1 = x1 - k1;
            while x1 < n && y1 < m && a[x1 as usize] == b[y1 as usize] {
                x1 += 1;
                y1 += 1;
            }
            v1[k1_offset] = x1;
            if x1 > n {
                k1_end += 2;
            } else if y1 > m {
                k1_start += 2;
            } else if front {
                let k2_offset = v_offset + delta - k1;
                if (0..v_length as isize).contains(&k2_offset) && v2[k2_offset as usize] != -1 {
                    let x2 = n - v2[k2_offset as usize];
                    if x1 >= x2 {
                        return bisect_split(a, b, x1 as usize, y1 as usize, deadline);
                    }
                }
            }
            k1 += 2;
        }

        // Reverse frontier, coordinates measured from the sequence ends.
        let mut k2 = -d + k2_start;
        while k2 <= d - k2_end {
            let k2_offset = (v_offset + k2) as usize;
            let mut x2 = if k2 == -d || (k2 != d && v2[k2_offset - 1] < v2[k2_offset + 1]) {
                v2[k2_offset + 1]
            } else {
                v2[k2_offset - 1] + 1
            };
            let mut y2 = x2 - k2;
            while x2 < n && y2 < m && a[(n - x2 - 1) as usize] == b[(m - y2 - 1) as usize] {
                x2 += 1;
                y2 += 1;
            }
            v2[k2_offset] = x2;
            if x2 > n {
                k2_end += 2;
            } else if y2 > m {
                k2_start += 2;
            } else if !front {
                let k1_offset = v_offset + delta - k2;
                if (0..v_length as isize).contains(&k1_offset) && v1[k1_offset as usize] != -1 {
                    let x1 = v1[k1_offset as usize];
                    let y1 = v_offset + x1 - k1_offset;
                    if x1 >= n - x2 {
                        return bisect_split(a, b, x1 as usize, y1 as usize, deadline);
                    }
                }
            }
            k2 += 2;
        }
    }

    // No overlap inside the budget: the coarsest valid answer.
    vec![Edit::delete(a.to_vec()), Edit::insert(b.to_vec())]
}

/// Recurse on the two halves named by an overlap point and splice
fn bisect_split<T: Atom>(
    a: &[T],
    b: &[T],
    x: usize,
    y: usize,
    deadline: Option<Instant>,
) -> EditScript<T> {
    let mut script = diff_slices(&a[..x], &b[..y], deadline);
    script.extend(diff_slices(&a[x..], &b[y..], deadline));
    script
}

/// Result of a successful half-match split
struct HalfMatch<'s, T> {
    a_head: &'s [T],
    a_tail: &'s [T],
    b_head: &'s [T],
    b_tail: &'s [T],
    common: &'s [T],
}

/// Do the two sequences share a run at least half the length of the
/// longer one?
fn half_match<'s, T: Atom>(a: &'s [T], b: &'s [T]) -> Option<HalfMatch<'s, T>> {
    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };
    if longer.len() < 10 || shorter.is_empty() {
        return None;
    }

    // Seed once from the second quarter, once from the third; keep the
    // candidate with the longer shared run.
    let hm1 = half_match_at(longer, shorter, (longer.len() + 3) / 4);
    let hm2 = half_match_at(longer, shorter, (longer.len() + 1) / 2);
    let best = match (hm1, hm2) {
        (None, None) => return None,
        (Some(hm), None) | (None, Some(hm)) => hm,
        (Some(hm1), Some(hm2)) => {
            if hm1.4.len() > hm2.4.len() {
                hm1
            } else {
                hm2
            }
        }
    };

    let (long_head, long_tail, short_head, short_tail, common) = best;
    let half = if a.len() > b.len() {
        HalfMatch {
            a_head: long_head,
            a_tail: long_tail,
            b_head: short_head,
            b_tail: short_tail,
            common,
        }
    } else {
        HalfMatch {
            a_head: short_head,
            a_tail: short_tail,
            b_head: long_head,
            b_tail: long_tail,
            common,
        }
    };
    Some(half)
}

type HalfMatchParts<'s, T> = (&'s [T], &'s [T], &'s [T], &'s [T], &'s [T]);

/// Seeded half-match check: does a run of `shorter` around some occurrence
/// of the quarter-length seed at `seed_start` cover half of `longer`?
fn half_match_at<'s, T: Atom>(
    longer: &'s [T],
    shorter: &'s [T],
    seed_start: usize,
) -> Option<HalfMatchParts<'s, T>> {
    let seed = &longer[seed_start..seed_start + longer.len() / 4];
    let mut best: Option<(usize, usize, usize)> = None; // (j, prefix, suffix)

    let mut search_from = 0;
    while let Some(found) = find_subslice(&shorter[search_from..], seed) {
        let j = search_from + found;
        let prefix = common_prefix_len(&longer[seed_start..], &shorter[j..]);
        let suffix = common_suffix_len(&longer[..seed_start], &shorter[..j]);
        if best.is_none_or(|(_, p, s)| p + s < prefix + suffix) {
            best = Some((j, prefix, suffix));
        }
        search_from = j + 1;
    }

    let (j, prefix, suffix) = best?;
    if prefix + suffix < longer.len() / 2 {
        return None;
    }

    Some((
        &longer[..seed_start - suffix],
        &longer[seed_start + prefix..],
        &shorter[..j - suffix],
        &shorter[j + prefix..],
        &shorter[j - suffix..j + prefix],
    ))
}

/// Number of atoms common to the starts of both slices
pub(crate) fn common_prefix_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Number of atoms common to the ends of both slices
pub(crate) fn common_suffix_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// First index of `needle` inside `haystack`, if any
fn find_subslice<T: Eq>(haystack: &[T], needle: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
