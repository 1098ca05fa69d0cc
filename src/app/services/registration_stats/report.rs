//! Peak registration time report

use super::top_n::TopN;
use crate::constants::{PEAK_HOURS_TITLE, PEAK_WEEKDAYS_TITLE};
use std::fmt;

/// Top peak hours and weekdays of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakTimeReport {
    pub peak_hours: TopN,
    pub peak_weekdays: TopN,
}

impl PeakTimeReport {
    pub fn new(peak_hours: TopN, peak_weekdays: TopN) -> Self {
        Self {
            peak_hours,
            peak_weekdays,
        }
    }

    /// Render the report as written to disk
    ///
    /// ```text
    /// TOP 5 Peak Hours
    /// 13: 3
    /// 9: 2
    ///
    /// TOP 3 Peak Weekdays
    /// Thursday: 4
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PeakTimeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", PEAK_HOURS_TITLE)?;
        write!(f, "{}", self.peak_hours)?;
        writeln!(f)?;
        writeln!(f, "{}", PEAK_WEEKDAYS_TITLE)?;
        write!(f, "{}", self.peak_weekdays)
    }
}
