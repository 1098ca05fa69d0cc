//! Tests for name capitalisation and file stems

use crate::app::services::normalizers::{capitalize_name, letter_file_stem};

#[test]
fn test_capitalize_name() {
    assert_eq!(capitalize_name(Some("allison")), "Allison");
    assert_eq!(capitalize_name(Some("SARAH")), "Sarah");
    assert_eq!(capitalize_name(Some("  jennifer ")), "Jennifer");
    assert_eq!(capitalize_name(Some("mary ANN")), "Mary ann");
}

#[test]
fn test_capitalize_missing_name() {
    assert_eq!(capitalize_name(None), "");
    assert_eq!(capitalize_name(Some("   ")), "");
}

#[test]
fn test_letter_file_stem_strips_whitespace_and_lowercases() {
    assert_eq!(letter_file_stem("Mary ann"), "maryann");
    assert_eq!(letter_file_stem("Allison"), "allison");
    assert_eq!(letter_file_stem(""), "");
}
