//! Data models for attendee processing
//!
//! This module contains the records flowing through the pipeline: the raw
//! attendee row as read from the CSV export, the legislator entries returned
//! by the directory, and the enriched record handed to the output sink.

use crate::Result;
use crate::constants::{INVALID_DATE_MARKER, LEGISLATOR_FALLBACK_MESSAGE};
use chrono::NaiveDateTime;
use serde::Deserialize;

// =============================================================================
// Attendee Input
// =============================================================================

/// One row of the attendee export, exactly as read
///
/// Fields other than the identifier are optional because exports routinely
/// contain short rows and blank cells; normalisation decides what a missing
/// value turns into.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttendeeRecord {
    /// Opaque identifier, kept as text whether the source wrote a number or not
    pub id: String,

    /// First name as typed by the attendee
    pub first_name: Option<String>,

    /// Raw postal code, possibly short, long or absent
    pub zipcode: Option<String>,

    /// Raw registration timestamp in `month/day/yy hour:minute` form
    pub registration_datetime: Option<String>,

    /// Raw home phone number with arbitrary separators
    pub home_phone: Option<String>,
}

impl AttendeeRecord {
    /// Create a record with only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder pattern: set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Builder pattern: set the raw postal code
    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    /// Builder pattern: set the raw registration timestamp
    pub fn with_registration_datetime(mut self, raw: impl Into<String>) -> Self {
        self.registration_datetime = Some(raw.into());
        self
    }

    /// Builder pattern: set the raw home phone
    pub fn with_home_phone(mut self, phone: impl Into<String>) -> Self {
        self.home_phone = Some(phone.into());
        self
    }
}

// =============================================================================
// Legislator Directory Results
// =============================================================================

/// An official returned by the legislator directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Legislator {
    pub name: String,
}

impl Legislator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result of looking up an attendee's legislators
///
/// Failures are not errors: they carry the human readable fallback message
/// that ends up in the letter instead of the names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The directory answered with these officials
    Found(Vec<Legislator>),
    /// The directory could not be used; holds the fallback message
    Unavailable(String),
}

impl LookupOutcome {
    /// Collapse a collaborator result, substituting the fallback on any error
    pub fn from_result(result: Result<Vec<Legislator>>) -> Self {
        match result {
            Ok(legislators) => Self::Found(legislators),
            Err(_) => Self::fallback(),
        }
    }

    /// The fixed fallback outcome
    pub fn fallback() -> Self {
        Self::Unavailable(LEGISLATOR_FALLBACK_MESSAGE.to_string())
    }

    /// True when the fallback message was substituted
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Text placed in the letter: comma separated names, or the fallback
    pub fn display_text(&self) -> String {
        match self {
            Self::Found(legislators) => legislators
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Self::Unavailable(message) => message.clone(),
        }
    }
}

// =============================================================================
// Enriched Output
// =============================================================================

/// An attendee after normalisation, enrichment and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    /// Identifier copied from the input row
    pub id: String,

    /// Capitalised first name
    pub name: String,

    /// Normalised 5 character postal code
    pub zipcode: String,

    /// Normalised phone digits or the bad number marker
    pub phone: String,

    /// Parsed registration time; `None` when the raw value was missing or
    /// unparseable
    pub registered_at: Option<NaiveDateTime>,

    /// Legislators or fallback message
    pub legislators: LookupOutcome,

    /// Rendered letter, empty until the renderer has run
    pub document: String,
}

impl EnrichedRecord {
    /// Builder pattern: attach the rendered letter
    pub fn with_document(mut self, document: String) -> Self {
        self.document = document;
        self
    }

    /// Registration time as shown in a letter, or the invalid date marker
    pub fn registration_display(&self) -> String {
        self.registered_at
            .map(|time| time.format("%B %-d, %Y at %H:%M").to_string())
            .unwrap_or_else(|| INVALID_DATE_MARKER.to_string())
    }
}
