//! Persisting letters and the report

use crate::app::models::EnrichedRecord;
use crate::app::services::normalizers::letter_file_stem;
use crate::constants::{LETTER_FILE_EXTENSION, LETTER_FILE_PREFIX};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination for rendered letters and the peak time report
pub trait OutputSink {
    /// Persist one rendered letter, returning where it went
    fn write_letter(&mut self, record: &EnrichedRecord) -> Result<PathBuf>;

    /// Persist the report text, replacing any previous report
    fn write_report(&mut self, report: &str) -> Result<PathBuf>;
}

/// Deterministic letter file name: `thanks_{id}_{stem}.html`
///
/// The stem is the name with whitespace removed and lower-cased; it is left
/// out when empty. Path separators in the identifier are replaced so every
/// letter lands directly in the output directory.
pub fn letter_file_name(record: &EnrichedRecord) -> String {
    let id: String = record
        .id
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let stem = letter_file_stem(&record.name);

    if stem.is_empty() {
        format!("{}_{}.{}", LETTER_FILE_PREFIX, id, LETTER_FILE_EXTENSION)
    } else {
        format!(
            "{}_{}_{}.{}",
            LETTER_FILE_PREFIX, id, stem, LETTER_FILE_EXTENSION
        )
    }
}

/// Writes letters into a directory and the report to a single file
///
/// Each file is opened, written and closed in one call, so a failure leaves
/// earlier outputs untouched.
#[derive(Debug, Clone)]
pub struct FileOutputSink {
    letters_dir: PathBuf,
    report_path: PathBuf,
}

impl FileOutputSink {
    pub fn new(letters_dir: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            letters_dir: letters_dir.into(),
            report_path: report_path.into(),
        }
    }

    pub fn letters_dir(&self) -> &Path {
        &self.letters_dir
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    fn ensure_dir(dir: &Path) -> Result<()> {
        if dir.as_os_str().is_empty() || dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(dir)
            .map_err(|e| Error::io(format!("Failed to create directory {}", dir.display()), e))
    }
}

impl OutputSink for FileOutputSink {
    fn write_letter(&mut self, record: &EnrichedRecord) -> Result<PathBuf> {
        Self::ensure_dir(&self.letters_dir)?;

        let path = self.letters_dir.join(letter_file_name(record));
        fs::write(&path, &record.document)
            .map_err(|e| Error::io(format!("Failed to write letter {}", path.display()), e))?;

        debug!("Wrote letter {}", path.display());
        Ok(path)
    }

    fn write_report(&mut self, report: &str) -> Result<PathBuf> {
        if let Some(parent) = self.report_path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&self.report_path, report).map_err(|e| {
            Error::io(
                format!("Failed to write report {}", self.report_path.display()),
                e,
            )
        })?;

        debug!("Wrote report {}", self.report_path.display());
        Ok(self.report_path.clone())
    }
}
