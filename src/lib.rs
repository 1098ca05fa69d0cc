//! Event Manager Library
//!
//! A Rust library for turning an event attendee list into personalised
//! thank-you letters and a short report of peak registration times.
//!
//! This library provides tools for:
//! - Reading attendee CSV exports with loosely formatted headers
//! - Normalising noisy postal codes, phone numbers and registration timestamps
//! - Enriching attendees with their legislators via a directory lookup
//! - Rendering one letter per attendee from a placeholder template
//! - Aggregating registration times into Top-N peak hours and weekdays

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod attendee_reader;
        pub mod legislator_lookup;
        pub mod letters;
        pub mod normalizers;
        pub mod pipeline;
        pub mod registration_stats;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AttendeeRecord, EnrichedRecord, Legislator, LookupOutcome};
pub use config::Config;

/// Result type alias for the event manager
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for event manager operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A required input is absent
    #[error("Missing required {name}: {path}")]
    MissingPrerequisite { name: String, path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Letter template error
    #[error("Template error: {message}")]
    Template { message: String },

    /// Legislator directory lookup failed
    #[error("Legislator lookup failed: {message}")]
    Lookup { message: String },

    /// Pipeline operation attempted in the wrong state
    #[error("Invalid pipeline state: {message}")]
    InvalidState { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing prerequisite error
    pub fn missing_prerequisite(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MissingPrerequisite {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create a lookup error
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// True when the error means a required input was absent at startup
    pub fn is_missing_prerequisite(&self) -> bool {
        matches!(self, Self::MissingPrerequisite { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

// The request URL carries the API key, so it never reaches the message
impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Lookup {
            message: error.without_url().to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Lookup {
            message: format!("malformed response body: {}", error),
        }
    }
}
