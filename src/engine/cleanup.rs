//! Correctness-preserving cleanup passes over edit scripts
//!
//! Raw scripts out of the core search are valid but often awkward: split
//! runs, tiny equalities stranded between edits, boundaries landing in
//! the middle of words. Three passes tidy them up without ever changing
//! what the script reconstructs to:
//!
//! - `merge` coalesces adjacent same-kind ops, factors shared material of
//!   paired Delete/Insert runs into neighboring Equal ops, drops empties,
//!   and slides an edit across a boundary Equal run duplicating its own
//!   leading or trailing content. Runs to fixpoint.
//! - `semantic` removes an Equal run sandwiched between edits when it is
//!   no longer than the edit volume on either side, re-merging the freed
//!   edits, then hands over to the boundary shift.
//! - `lossless_shift` slides a single edit between two Equal runs across
//!   repeated shared atoms onto the best-scoring seam.
//!
//! All passes rebuild or patch the sequence through tracked indices; the
//! reconstruction identities are preserved by construction.

use crate::engine::atom::Atom;
use crate::engine::bisection::{common_prefix_len, common_suffix_len};
use crate::engine::edit::{Edit, EditKind, EditScript};

/// Coalesce, factor, and shift until nothing changes
pub fn merge<T: Atom>(script: &mut EditScript<T>) {
    loop {
        let mut changed = coalesce(script);
        changed |= shift_adjacent(script);
        if !changed {
            break;
        }
    }
}

/// One rebuild sweep: group Delete/Insert material between equalities,
/// factor shared prefixes and suffixes into the surrounding Equal ops,
/// and join adjacent equalities
fn coalesce<T: Atom>(script: &mut EditScript<T>) -> bool {
    let mut out: EditScript<T> = Vec::with_capacity(script.len());
    let mut deletes: Vec<T> = Vec::new();
    let mut inserts: Vec<T> = Vec::new();
    let mut delete_runs = 0usize;
    let mut insert_runs = 0usize;
    let mut changed = false;

    for edit in script.drain(..) {
        match edit {
            Edit::Delete { run } => {
                if run.is_empty() {
                    changed = true;
                } else {
                    delete_runs += 1;
                    deletes.extend(run);
                }
            }
            Edit::Insert { run } => {
                if run.is_empty() {
                    changed = true;
                } else {
                    insert_runs += 1;
                    inserts.extend(run);
                }
            }
            Edit::Equal { run } => {
                if run.is_empty() {
                    // Dropping an interior empty equality merges the edit
                    // groups on both of its sides.
                    changed = true;
                    continue;
                }
                let mut equal = run;
                changed |= delete_runs > 1 || insert_runs > 1;
                flush_group(&mut deletes, &mut inserts, &mut equal, &mut out, &mut changed);
                delete_runs = 0;
                insert_runs = 0;

                if let Some(Edit::Equal { run: previous }) = out.last_mut() {
                    previous.extend(equal);
                    changed = true;
                } else {
                    out.push(Edit::equal(equal));
                }
            }
        }
    }

    let mut trailing: Vec<T> = Vec::new();
    changed |= delete_runs > 1 || insert_runs > 1;
    flush_group(&mut deletes, &mut inserts, &mut trailing, &mut out, &mut changed);
    if !trailing.is_empty() {
        out.push(Edit::equal(trailing));
    }

    *script = out;
    changed
}

/// Emit one pending Delete/Insert group, factoring shared material into
/// the previous Equal (prefix) and the upcoming Equal (suffix)
fn flush_group<T: Atom>(
    deletes: &mut Vec<T>,
    inserts: &mut Vec<T>,
    upcoming_equal: &mut Vec<T>,
    out: &mut EditScript<T>,
    changed: &mut bool,
) {
    if !deletes.is_empty() && !inserts.is_empty() {
        let prefix = common_prefix_len(inserts, deletes);
        if prefix > 0 {
            let shared: Vec<T> = inserts[..prefix].to_vec();
            if let Some(Edit::Equal { run }) = out.last_mut() {
                run.extend(shared);
            } else {
                out.push(Edit::equal(shared));
            }
            deletes.drain(..prefix);
            inserts.drain(..prefix);
            *changed = true;
        }

        let suffix = common_suffix_len(inserts, deletes);
        if suffix > 0 {
            let mut shared: Vec<T> = inserts[inserts.len() - suffix..].to_vec();
            shared.append(upcoming_equal);
            *upcoming_equal = shared;
            deletes.truncate(deletes.len() - suffix);
            inserts.truncate(inserts.len() - suffix);
            *changed = true;
        }
    }

    if !deletes.is_empty() {
        out.push(Edit::delete(std::mem::take(deletes)));
    }
    if !inserts.is_empty() {
        out.push(Edit::insert(std::mem::take(inserts)));
    }
    deletes.clear();
    inserts.clear();
}

/// Slide a single edit across a boundary Equal run that duplicates the
/// edit's own leading or trailing content, eliminating the equality
fn shift_adjacent<T: Atom>(script: &mut EditScript<T>) -> bool {
    let mut changed = false;
    let mut pointer = 1usize;
    while pointer + 1 < script.len() {
        if script[pointer - 1].kind() == EditKind::Equal
            && script[pointer + 1].kind() == EditKind::Equal
            && script[pointer].kind() != EditKind::Equal
        {
            let previous = script[pointer - 1].run().to_vec();
            let next = script[pointer + 1].run().to_vec();
            let edit = script[pointer].run();
            let kind = script[pointer].kind();

            if edit.ends_with(&previous) {
                // A<ins>BA</ins> becomes <ins>AB</ins>A.
                let mut rotated = previous.clone();
                rotated.extend_from_slice(&edit[..edit.len() - previous.len()]);
                let mut grown = previous;
                grown.extend(next);
                script[pointer] = Edit::with_kind(kind, rotated);
                script[pointer + 1] = Edit::equal(grown);
                script.remove(pointer - 1);
                changed = true;
            } else if edit.starts_with(&next) {
                let mut rotated = edit[next.len()..].to_vec();
                rotated.extend_from_slice(&next);
                if let Edit::Equal { run } = &mut script[pointer - 1] {
                    run.extend(next);
                }
                script[pointer] = Edit::with_kind(kind, rotated);
                script.remove(pointer + 1);
                changed = true;
            }
        }
        pointer += 1;
    }
    changed
}

/// Drop equalities that are semantically trivial: an Equal run between
/// edits no longer than the edit volume before it and after it
pub fn semantic<T: Atom>(script: &mut EditScript<T>) {
    let mut changed = false;
    let mut equalities: Vec<usize> = Vec::new();
    let mut candidate_len: Option<usize> = None;
    let mut volume_before = 0usize;
    let mut volume_after = 0usize;
    let mut pointer = 0usize;

    while pointer < script.len() {
        if script[pointer].kind() == EditKind::Equal {
            equalities.push(pointer);
            volume_before = volume_after;
            volume_after = 0;
            candidate_len = Some(script[pointer].len());
            pointer += 1;
            continue;
        }

        volume_after += script[pointer].len();
        let splittable =
            candidate_len.is_some_and(|len| len <= volume_before && len <= volume_after);
        if splittable && let Some(candidate) = equalities.pop() {
            // Re-issue the equality as a paired Delete and Insert; the
            // merge pass folds them into their neighbors.
            let run = script[candidate].run().to_vec();
            script[candidate] = Edit::delete(run.clone());
            script.insert(candidate + 1, Edit::insert(run));
            equalities.pop();
            pointer = equalities.last().map_or(0, |&anchor| anchor + 1);
            volume_before = 0;
            volume_after = 0;
            candidate_len = None;
            changed = true;
        } else {
            pointer += 1;
        }
    }

    if changed {
        merge(script);
    }
    lossless_shift(script);
}

/// Slide a single edit between two equalities across repeated shared
/// atoms to the best-scoring seam; never changes what the script
/// reconstructs to
pub fn lossless_shift<T: Atom>(script: &mut EditScript<T>) {
    let mut pointer = 1isize;
    while pointer + 1 < script.len() as isize {
        let at = pointer as usize;
        if script[at - 1].kind() != EditKind::Equal || script[at + 1].kind() != EditKind::Equal {
            pointer += 1;
            continue;
        }

        let mut equality1 = script[at - 1].run().to_vec();
        let mut edit = script[at].run().to_vec();
        let mut equality2 = script[at + 1].run().to_vec();
        let kind = script[at].kind();

        // First slide the edit as far left as it will go.
        let offset = common_suffix_len(&equality1, &edit);
        if offset > 0 {
            let moved: Vec<T> = edit[edit.len() - offset..].to_vec();
            equality1.truncate(equality1.len() - offset);
            let mut rotated = moved.clone();
            rotated.extend_from_slice(&edit[..edit.len() - offset]);
            edit = rotated;
            let mut grown = moved;
            grown.extend(equality2);
            equality2 = grown;
        }

        // Then walk right one atom at a time, keeping the best seam.
        let mut best_equality1 = equality1.clone();
        let mut best_edit = edit.clone();
        let mut best_equality2 = equality2.clone();
        let mut best_score =
            T::seam_score(&equality1, &edit) + T::seam_score(&edit, &equality2);

        while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
            let atom = equality2.remove(0);
            equality1.push(edit.remove(0));
            edit.push(atom);
            let score = T::seam_score(&equality1, &edit) + T::seam_score(&edit, &equality2);
            // >= favors trailing rather than leading whitespace on edits.
            if score >= best_score {
                best_score = score;
                best_equality1 = equality1.clone();
                best_edit = edit.clone();
                best_equality2 = equality2.clone();
            }
        }

        if script[at - 1].run() != best_equality1.as_slice() {
            if best_equality1.is_empty() {
                script.remove(at - 1);
                pointer -= 1;
            } else {
                script[(pointer - 1) as usize] = Edit::equal(best_equality1);
            }
            script[pointer as usize] = Edit::with_kind(kind, best_edit);
            if best_equality2.is_empty() {
                script.remove((pointer + 1) as usize);
                pointer -= 1;
            } else {
                script[(pointer + 1) as usize] = Edit::equal(best_equality2);
            }
        }
        pointer += 1;
    }
}
