//! Tests for registration time statistics

pub mod frequency_tests;

use crate::app::services::registration_stats::FrequencyTable;

/// Build a table by incrementing each key in order
pub fn table_from_keys(keys: &[&str]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for key in keys {
        table.increment(*key);
    }
    table
}
