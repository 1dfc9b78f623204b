mod apply_addition_to_empty_file;
mod round_trip_compare_then_apply;

use rift::{CompareOptions, TimeBudget};

pub fn options() -> CompareOptions {
    CompareOptions {
        time_budget: TimeBudget::unlimited(),
        ..CompareOptions::default()
    }
}
