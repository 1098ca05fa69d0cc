//! Run statistics and results

use crate::app::services::registration_stats::PeakTimeReport;
use std::path::PathBuf;

/// Counters for a single pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    /// Attendee records taken through the pipeline
    pub records_processed: usize,
    /// Letters handed to the sink successfully
    pub letters_written: usize,
    /// Records whose lookup fell back to the fixed message
    pub lookup_fallbacks: usize,
    /// Records whose registration time was absent or unparseable
    pub invalid_timestamps: usize,
    /// Letters that could not be rendered or written
    pub output_failures: usize,
    /// Messages for each output failure
    pub error_messages: Vec<String>,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter that could not be produced
    pub fn add_output_failure(&mut self, message: String) {
        self.output_failures += 1;
        self.error_messages.push(message);
    }

    /// Records counted in the registration statistics
    pub fn timestamps_counted(&self) -> usize {
        self.records_processed - self.invalid_timestamps
    }

    /// Percentage of records whose lookup succeeded
    pub fn lookup_success_rate(&self) -> f64 {
        if self.records_processed == 0 {
            100.0
        } else {
            ((self.records_processed - self.lookup_fallbacks) as f64
                / self.records_processed as f64)
                * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Pipeline Summary: {} attendees | Letters: {} written, {} failed | \
             Lookups: {:.1}% answered ({} fallbacks) | Registration times: {} counted, {} invalid",
            self.records_processed,
            self.letters_written,
            self.output_failures,
            self.lookup_success_rate(),
            self.lookup_fallbacks,
            self.timestamps_counted(),
            self.invalid_timestamps
        )
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Peak hours and weekdays as written to the report
    pub report: PeakTimeReport,
    /// Where the sink put the report
    pub report_path: PathBuf,
    pub stats: PipelineStats,
}
