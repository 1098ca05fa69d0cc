//! Configuration management and validation.
//!
//! Provides configuration structures for input locations, output locations
//! and the legislator directory, layered from built-in defaults and then
//! environment variables, plus the startup preflight that checks every
//! required input exists before any record is processed.

use crate::constants::{
    DEFAULT_ATTENDEES_PATH, DEFAULT_LOOKUP_TIMEOUT_SECS, DEFAULT_LOOKUP_URL, DEFAULT_OUTPUT_DIR,
    DEFAULT_REPORT_PATH, DEFAULT_SECRET_KEY_PATH, DEFAULT_TEMPLATE_PATH,
    REGISTRATION_DATETIME_FORMAT, env_vars,
};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Locations of the inputs a run cannot start without
#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// Attendee CSV export
    pub attendees_path: PathBuf,

    /// File holding the directory API key
    pub secret_key_path: PathBuf,

    /// Letter template
    pub template_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            attendees_path: PathBuf::from(DEFAULT_ATTENDEES_PATH),
            secret_key_path: PathBuf::from(DEFAULT_SECRET_KEY_PATH),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
        }
    }
}

/// Where rendered letters and the report are written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory receiving one letter per attendee
    pub letters_dir: PathBuf,

    /// Peak registration time report, overwritten on each run
    pub report_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            letters_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

/// Legislator directory settings
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    /// Representatives endpoint
    pub url: String,

    /// Timeout applied to each lookup request
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LOOKUP_URL.to_string(),
            timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
        }
    }
}

impl LookupConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Complete event manager configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub lookup: LookupConfig,

    /// strftime layout of the registration date column
    pub registration_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            lookup: LookupConfig::default(),
            registration_format: REGISTRATION_DATETIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from defaults overlaid with environment variables
    pub fn load() -> Result<Self> {
        let config = Self::default().apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_vars::ATTENDEES) {
            self.input.attendees_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(env_vars::SECRET_KEY) {
            self.input.secret_key_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(env_vars::TEMPLATE) {
            self.input.template_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(env_vars::OUTPUT_DIR) {
            self.output.letters_dir = PathBuf::from(path);
        }
        if let Some(path) = lookup(env_vars::REPORT) {
            self.output.report_path = PathBuf::from(path);
        }
        if let Some(url) = lookup(env_vars::LOOKUP_URL) {
            self.lookup.url = url;
        }
        if let Some(raw) = lookup(env_vars::LOOKUP_TIMEOUT_SECS) {
            self.lookup.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env_vars::LOOKUP_TIMEOUT_SECS,
                    raw
                ))
            })?;
        }
        Ok(self)
    }

    /// Set the attendee CSV path
    pub fn with_attendees_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input.attendees_path = path.into();
        self
    }

    /// Set the credential file path
    pub fn with_secret_key_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input.secret_key_path = path.into();
        self
    }

    /// Set the letter template path
    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input.template_path = path.into();
        self
    }

    /// Set the letter output directory
    pub fn with_letters_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.letters_dir = path.into();
        self
    }

    /// Set the report path
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.report_path = path.into();
        self
    }

    /// Set the directory endpoint
    pub fn with_lookup_url(mut self, url: impl Into<String>) -> Self {
        self.lookup.url = url.into();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let paths: [(&str, &Path); 5] = [
            ("attendees path", &self.input.attendees_path),
            ("secret key path", &self.input.secret_key_path),
            ("template path", &self.input.template_path),
            ("letters directory", &self.output.letters_dir),
            ("report path", &self.output.report_path),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(Error::configuration(format!("{} must not be empty", name)));
            }
        }

        if self.registration_format.trim().is_empty() {
            return Err(Error::configuration(
                "registration format must not be empty",
            ));
        }

        if self.lookup.url.trim().is_empty() {
            return Err(Error::configuration("lookup URL must not be empty"));
        }

        if self.lookup.timeout_secs == 0 {
            return Err(Error::configuration(
                "lookup timeout must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Fail fast when any required input is absent
    ///
    /// Checks the attendee data, the credential and the template in that
    /// order and reports the first one missing.
    pub fn check_prerequisites(&self) -> Result<()> {
        let required: [(&str, &Path); 3] = [
            ("attendee data", &self.input.attendees_path),
            ("API credential", &self.input.secret_key_path),
            ("letter template", &self.input.template_path),
        ];

        for (name, path) in required {
            if !path.is_file() {
                return Err(Error::missing_prerequisite(
                    name,
                    path.display().to_string(),
                ));
            }
            debug!("Found {} at {}", name, path.display());
        }

        Ok(())
    }
}
