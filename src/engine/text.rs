//! Line- and character-granularity entry points over the generic engine
//!
//! File comparison runs the engine over whole lines; inline highlighting
//! runs it over characters. Both share the same core; only the atom type
//! and the surrounding passes differ.
//!
//! At line granularity each distinct line is first interned to a stable
//! synthetic id (first-occurrence order), shrinking every comparison in
//! the core search to an integer test. The script is expanded back to
//! real lines before cleanup, and any Delete+Insert block left behind by
//! the interned pass (typically a degraded or half-match-split region)
//! is re-diffed at full granularity.

use crate::engine::bisection::{Bisection, DiffAlgorithm, TimeBudget};
use crate::engine::cleanup;
use crate::engine::edit::{Edit, EditKind, EditScript};
use std::collections::HashMap;
use tracing::trace;

/// Edit script between two line sequences
pub fn diff_lines(a: &[String], b: &[String], budget: TimeBudget) -> EditScript<String> {
    let interner = LineInterner::over(a, b);
    trace!(
        lines_a = a.len(),
        lines_b = b.len(),
        distinct = interner.table.len(),
        "interned lines"
    );

    let interned = Bisection::new(&interner.a, &interner.b)
        .with_budget(budget)
        .diff();
    let mut script = interner.expand(interned);

    resplit_replacements(&mut script, budget);
    cleanup::semantic(&mut script);
    cleanup::merge(&mut script);
    script
}

/// Edit script between two strings, character by character, cleaned up
/// for human-readable inline highlighting
pub fn diff_chars(a: &str, b: &str, budget: TimeBudget) -> EditScript<char> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut script = Bisection::new(&a, &b).with_budget(budget).diff();
    cleanup::semantic(&mut script);
    script
}

/// Bidirectional mapping between distinct lines and synthetic ids
struct LineInterner {
    a: Vec<u32>,
    b: Vec<u32>,
    table: Vec<String>,
}

impl LineInterner {
    fn over(a: &[String], b: &[String]) -> Self {
        let mut ids: HashMap<String, u32> = HashMap::new();
        let mut table: Vec<String> = Vec::new();
        let interned_a = Self::intern_side(a, &mut ids, &mut table);
        let interned_b = Self::intern_side(b, &mut ids, &mut table);
        Self {
            a: interned_a,
            b: interned_b,
            table,
        }
    }

    fn intern_side(
        lines: &[String],
        ids: &mut HashMap<String, u32>,
        table: &mut Vec<String>,
    ) -> Vec<u32> {
        lines
            .iter()
            .map(|line| {
                if let Some(&id) = ids.get(line) {
                    return id;
                }
                let id = table.len() as u32;
                table.push(line.clone());
                ids.insert(line.clone(), id);
                id
            })
            .collect()
    }

    fn expand(&self, script: EditScript<u32>) -> EditScript<String> {
        script
            .into_iter()
            .map(|edit| {
                let kind = edit.kind();
                let run = edit
                    .into_run()
                    .into_iter()
                    .map(|id| self.table[id as usize].clone())
                    .collect();
                Edit::with_kind(kind, run)
            })
            .collect()
    }
}

/// Re-diff adjacent Delete+Insert blocks at full granularity
///
/// The interned core can leave coarse replacement blocks behind,
/// typically from a degraded search. Re-running the engine over the
/// actual line values recovers any structure hiding inside them.
fn resplit_replacements(script: &mut EditScript<String>, budget: TimeBudget) {
    let mut out: EditScript<String> = Vec::with_capacity(script.len());
    let mut deletes: Vec<String> = Vec::new();
    let mut inserts: Vec<String> = Vec::new();

    let mut flush = |deletes: &mut Vec<String>, inserts: &mut Vec<String>, out: &mut EditScript<String>| {
        if !deletes.is_empty() && !inserts.is_empty() {
            let refined = Bisection::new(deletes, inserts).with_budget(budget).diff();
            out.extend(refined);
        } else if !deletes.is_empty() {
            out.push(Edit::delete(std::mem::take(deletes)));
        } else if !inserts.is_empty() {
            out.push(Edit::insert(std::mem::take(inserts)));
        }
        deletes.clear();
        inserts.clear();
    };

    for edit in script.drain(..) {
        match edit {
            Edit::Delete { run } => deletes.extend(run),
            Edit::Insert { run } => inserts.extend(run),
            Edit::Equal { run } => {
                flush(&mut deletes, &mut inserts, &mut out);
                out.push(Edit::equal(run));
            }
        }
    }
    flush(&mut deletes, &mut inserts, &mut out);

    *script = out;
}
