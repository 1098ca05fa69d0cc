//! Tests for the attendee pipeline
//!
//! Collaborators are replaced with in-memory fixtures so no test touches the
//! network or the filesystem.


use crate::app::models::{AttendeeRecord, EnrichedRecord, Legislator};
use crate::app::services::letters::{LetterTemplate, OutputSink};
use crate::app::services::pipeline::EventPipeline;
use crate::constants::REGISTRATION_DATETIME_FORMAT;
use crate::{Error, Result};
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::PathBuf;

/// Sink that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub letters: Vec<EnrichedRecord>,
    pub reports: Vec<String>,
    /// Attendee ids whose letters fail to write
    pub failing_ids: HashSet<String>,
    pub fail_report: bool,
}

impl MemorySink {
    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            failing_ids: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl OutputSink for MemorySink {
    fn write_letter(&mut self, record: &EnrichedRecord) -> Result<PathBuf> {
        if self.failing_ids.contains(&record.id) {
            return Err(Error::io(
                "disk full",
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ));
        }
        self.letters.push(record.clone());
        Ok(PathBuf::from(format!("memory/{}", record.id)))
    }

    fn write_report(&mut self, report: &str) -> Result<PathBuf> {
        if self.fail_report {
            return Err(Error::io(
                "read-only",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.reports.push(report.to_string());
        Ok(PathBuf::from("memory/report.txt"))
    }
}

/// Lookup that answers with one senator and remembers what it was asked
#[derive(Debug, Default)]
pub struct RecordingLookup {
    pub requested: RefCell<Vec<String>>,
}

impl crate::app::services::legislator_lookup::LegislatorLookup for RecordingLookup {
    fn legislators_by_zipcode(&self, zipcode: &str) -> Result<Vec<Legislator>> {
        self.requested.borrow_mut().push(zipcode.to_string());
        Ok(vec![Legislator::new(format!("Senator for {}", zipcode))])
    }
}

/// Lookup that always fails
pub fn failing_lookup(_zipcode: &str) -> Result<Vec<Legislator>> {
    Err(Error::lookup("directory unavailable"))
}

pub fn test_template() -> LetterTemplate {
    LetterTemplate::parse("Dear {{name}} ({{zipcode}}): {{legislators}}").unwrap()
}

pub fn attendee(id: &str, name: &str, zipcode: &str, registered: &str) -> AttendeeRecord {
    AttendeeRecord::new(id)
        .with_first_name(name)
        .with_zipcode(zipcode)
        .with_registration_datetime(registered)
}

/// Six attendees registering at hours 9, 9, 9, 10, 10 and 11
pub fn sample_attendees() -> Vec<AttendeeRecord> {
    vec![
        attendee("1", "allison", "20010", "11/12/08 9:00"),
        attendee("2", "SArah", "20009", "11/12/08 9:23"),
        attendee("3", "sarah", "33703", "11/13/08 9:30"),
        attendee("4", "david", "7306", "11/25/08 10:21"),
        attendee("5", "chris", "", "2/2/09 10:29"),
        attendee("6", "aya", "90210-1234", "11/13/08 11:05"),
    ]
}

pub fn recording_pipeline() -> EventPipeline<RecordingLookup, LetterTemplate, MemorySink> {
    EventPipeline::new(
        RecordingLookup::default(),
        test_template(),
        MemorySink::default(),
        REGISTRATION_DATETIME_FORMAT,
    )
}
