//! Postal code normalisation

use crate::constants::{ZIPCODE_LENGTH, ZIPCODE_PAD_CHAR};

/// Normalise a raw postal code to exactly five characters
///
/// Absent values count as the empty string. The value is left-padded with
/// `'0'` up to five characters and then cut to its first five, so short
/// codes gain leading zeros and long codes keep only their first five
/// characters. Lengths are measured in characters, not bytes.
pub fn normalize_zipcode(raw: Option<&str>) -> String {
    let text = raw.unwrap_or("");
    let missing = ZIPCODE_LENGTH.saturating_sub(text.chars().count());

    std::iter::repeat(ZIPCODE_PAD_CHAR)
        .take(missing)
        .chain(text.chars())
        .take(ZIPCODE_LENGTH)
        .collect()
}
