//! Phone number normalisation

use crate::constants::{BAD_PHONE_MARKER, PHONE_COUNTRY_CODE, PHONE_DIGITS};

/// Reduce a raw phone number to ten digits
///
/// All non-digit characters are discarded first. Ten digits are returned as
/// they are; eleven digits are accepted only with a leading `1` country
/// code, which is dropped. Anything else yields [`BAD_PHONE_MARKER`].
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        PHONE_DIGITS => digits,
        len if len == PHONE_DIGITS + 1 && digits.starts_with(PHONE_COUNTRY_CODE) => {
            digits[1..].to_string()
        }
        _ => BAD_PHONE_MARKER.to_string(),
    }
}
