//! Registration timestamp parsing

use crate::constants::INVALID_DATE_MARKER;
use chrono::NaiveDateTime;

/// A registration time that does not match the expected layout
///
/// Displays as the fixed "Invalid date information" marker so callers that
/// only need text can use it directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", INVALID_DATE_MARKER)]
pub struct InvalidTimestamp {
    /// The raw value that failed to parse
    pub raw: String,
}

/// Parse a raw registration time using a strftime layout
///
/// Surrounding whitespace is ignored. Malformed text, missing fields,
/// non-numeric pieces and impossible calendar values (month 13, minute 99)
/// all produce [`InvalidTimestamp`].
pub fn parse_registration_time(
    raw: &str,
    format: &str,
) -> std::result::Result<NaiveDateTime, InvalidTimestamp> {
    NaiveDateTime::parse_from_str(raw.trim(), format).map_err(|_| InvalidTimestamp {
        raw: raw.to_string(),
    })
}
