//! Registration time statistics
//!
//! Aggregates parsed registration timestamps into two frequency tables, one
//! keyed by hour of day and one by weekday name, and turns them into the
//! peak time report written at the end of a run.
//!
//! # Architecture
//!
//! - [`frequency`] - insertion-ordered key to count table
//! - [`top_n`] - highest-count selection with first-seen tie-break
//! - [`report`] - Top-N hours and weekdays formatted as text
//!
//! Only timestamps that parse are counted. An unparseable registration time
//! leaves both tables untouched and is not treated as an error.

pub mod frequency;
pub mod report;
pub mod top_n;

#[cfg(test)]
pub mod tests;

pub use frequency::FrequencyTable;
pub use report::PeakTimeReport;
pub use top_n::TopN;

use crate::app::services::normalizers::parse_registration_time;
use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

/// Hour-of-day key as written in the report, e.g. `"9"` or `"14"`
pub fn hour_key(time: &NaiveDateTime) -> String {
    time.hour().to_string()
}

/// Full English weekday name, e.g. `"Friday"`
pub fn weekday_key(time: &NaiveDateTime) -> String {
    time.format("%A").to_string()
}

/// Record one registration time into the hour and weekday tables
///
/// Returns the parsed time, or `None` when the raw value could not be
/// parsed, in which case neither table is modified.
pub fn log_registration_time(
    raw: &str,
    format: &str,
    hours: &mut FrequencyTable,
    weekdays: &mut FrequencyTable,
) -> Option<NaiveDateTime> {
    match parse_registration_time(raw, format) {
        Ok(time) => {
            hours.increment(hour_key(&time));
            weekdays.increment(weekday_key(&time));
            Some(time)
        }
        Err(e) => {
            debug!("Skipping registration time '{}': {}", raw, e);
            None
        }
    }
}

/// Both frequency tables of a single run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationStats {
    /// Registrations per hour of day
    pub hours: FrequencyTable,
    /// Registrations per weekday
    pub weekdays: FrequencyTable,
}

impl RegistrationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and count one raw registration time
    pub fn record(&mut self, raw: &str, format: &str) -> Option<NaiveDateTime> {
        log_registration_time(raw, format, &mut self.hours, &mut self.weekdays)
    }

    /// Total registrations counted
    pub fn total(&self) -> usize {
        self.hours.total()
    }

    /// Build the peak time report from the current tables
    pub fn peak_report(&self, hours: usize, weekdays: usize) -> PeakTimeReport {
        PeakTimeReport::new(self.hours.top_n(hours), self.weekdays.top_n(weekdays))
    }
}
