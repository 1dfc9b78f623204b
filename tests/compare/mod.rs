mod bound_context_snippets_by_context_size;
mod refuse_binary_and_doubly_absent_inputs;
mod show_addition_chunk_for_new_file;
mod show_no_chunks_for_identical_content;
mod show_single_chunk_for_nearby_insertions;
mod show_subtraction_chunk_for_deleted_file;
mod treat_bom_changes_according_to_bom_mode;

use rift::{CompareOptions, TimeBudget};

/// Deterministic options for comparisons under test
pub fn options() -> CompareOptions {
    CompareOptions {
        time_budget: TimeBudget::unlimited(),
        ..CompareOptions::default()
    }
}

/// Join lines with the CRLF separator the comparer expects
pub fn content(lines: &[&str]) -> String {
    lines.join("\r\n")
}
