//! Attendee CSV reading
//!
//! Reads the attendee export into [`AttendeeRecord`]s. Headers are matched
//! case-insensitively after trimming, so `first_Name` and `Zipcode` from the
//! registration system's export are found without configuration. Short rows
//! and blank cells are allowed and surface as absent fields.

use crate::app::models::AttendeeRecord;
use crate::constants::columns;
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Where each attendee field lives in the export
#[derive(Debug, Clone, PartialEq)]
pub struct AttendeeColumns {
    /// Normalised header name to index
    pub name_to_index: HashMap<String, usize>,
    /// Identifier column, `None` when rows are identified by position
    pub id: Option<usize>,
}

impl AttendeeColumns {
    /// Analyse the header row
    ///
    /// The identifier is the `id` column, or the first column when its
    /// header is blank (the usual shape of an export with a row index).
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            let name = header.trim().to_lowercase();
            if !name.is_empty() {
                name_to_index.entry(name).or_insert(index);
            }
        }

        let id = name_to_index.get(columns::ID).copied().or_else(|| {
            headers
                .get(0)
                .filter(|first| first.trim().is_empty())
                .map(|_| 0)
        });

        if id.is_none() {
            warn!("No identifier column found; attendees will be numbered by row");
        }
        for column in [
            columns::FIRST_NAME,
            columns::ZIPCODE,
            columns::REGISTRATION_DATE,
            columns::HOME_PHONE,
        ] {
            if !name_to_index.contains_key(column) {
                warn!("Attendee data has no '{}' column", column);
            }
        }

        Self { name_to_index, id }
    }

    /// Get the index for a normalised column name
    pub fn get_index(&self, column: &str) -> Option<usize> {
        self.name_to_index.get(column).copied()
    }

    /// Non-empty value of `column` in `row`
    fn field(&self, row: &StringRecord, column: &str) -> Option<String> {
        self.get_index(column)
            .and_then(|index| row.get(index))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Build a record from one data row; `position` is 1-based
    pub fn to_record(&self, row: &StringRecord, position: usize) -> AttendeeRecord {
        let id = self
            .id
            .and_then(|index| row.get(index))
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| position.to_string());

        AttendeeRecord {
            id,
            first_name: self.field(row, columns::FIRST_NAME),
            zipcode: self.field(row, columns::ZIPCODE),
            registration_datetime: self.field(row, columns::REGISTRATION_DATE),
            home_phone: self.field(row, columns::HOME_PHONE),
        }
    }
}

/// Read every attendee from a CSV file
pub fn read_attendees(path: &Path) -> Result<Vec<AttendeeRecord>> {
    info!("Reading attendees from {}", path.display());

    let file = File::open(path).map_err(|e| {
        Error::io(format!("Failed to open attendee data {}", path.display()), e)
    })?;
    read_attendees_from(file, &path.display().to_string())
}

/// Read every attendee from any CSV source; `source` names it in errors
pub fn read_attendees_from<R: Read>(reader: R, source: &str) -> Result<Vec<AttendeeRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(source, "Failed to read header row", Some(e)))?
        .clone();
    let mapping = AttendeeColumns::analyze(&headers);
    debug!("Attendee columns: {:?}", mapping.name_to_index);

    let mut records = Vec::new();
    for (offset, row) in csv_reader.records().enumerate() {
        let position = offset + 1;
        let row = row.map_err(|e| {
            Error::csv_parsing(source, format!("Failed to read attendee row {}", position), Some(e))
        })?;
        records.push(mapping.to_record(&row, position));
    }

    info!("Read {} attendees from {}", records.len(), source);
    Ok(records)
}
