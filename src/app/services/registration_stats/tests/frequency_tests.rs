//! Tests for the frequency table

use super::*;

#[test]
fn test_new_table_is_empty() {
    let table = FrequencyTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.total(), 0);
}

#[test]
fn test_get_missing_key_is_zero() {
    let table = table_from_keys(&["9"]);
    assert_eq!(table.get("10"), 0);
    assert_eq!(table.get("9"), 1);
}

#[test]
fn test_increment_creates_then_counts() {
    let table = table_from_keys(&["9", "9", "9", "10", "10", "11"]);

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("9"), 3);
    assert_eq!(table.get("10"), 2);
    assert_eq!(table.get("11"), 1);
    assert_eq!(table.total(), 6);
}

#[test]
fn test_iteration_keeps_first_seen_order() {
    let table = table_from_keys(&["Monday", "Friday", "Monday", "Sunday"]);
    let entries: Vec<(&str, usize)> = table.iter().collect();
    assert_eq!(entries, vec![("Monday", 2), ("Friday", 1), ("Sunday", 1)]);
}
