//! Application constants for the event manager
//!
//! This module contains fallback markers, default paths, formats and
//! report settings used throughout the event manager.

// =============================================================================
// Fallback Markers
// =============================================================================

/// Returned by the phone normaliser for anything that is not a usable number
pub const BAD_PHONE_MARKER: &str = "Bad number";

/// Display text of an unparseable registration timestamp
pub const INVALID_DATE_MARKER: &str = "Invalid date information";

/// Substituted for the legislator list whenever the directory lookup fails
pub const LEGISLATOR_FALLBACK_MESSAGE: &str =
    "You can find your representatives by visiting www.commoncause.org/take-action/find-elected-officials";

// =============================================================================
// Field Normalisation
// =============================================================================

/// Width of a normalised postal code
pub const ZIPCODE_LENGTH: usize = 5;

/// Character used to left-pad short postal codes
pub const ZIPCODE_PAD_CHAR: char = '0';

/// Digits in a domestic phone number
pub const PHONE_DIGITS: usize = 10;

/// Leading country code accepted on 11 digit phone numbers
pub const PHONE_COUNTRY_CODE: char = '1';

/// Registration timestamp layout: month/day/2-digit-year hour:minute (24h)
pub const REGISTRATION_DATETIME_FORMAT: &str = "%m/%d/%y %H:%M";

// =============================================================================
// Attendee CSV Columns
// =============================================================================

/// CSV column names, matched case-insensitively after trimming
pub mod columns {
    /// Explicit identifier column; falls back to a blank first header
    pub const ID: &str = "id";
    pub const REGISTRATION_DATE: &str = "regdate";
    pub const FIRST_NAME: &str = "first_name";
    pub const HOME_PHONE: &str = "homephone";
    pub const ZIPCODE: &str = "zipcode";
}

// =============================================================================
// Default Paths
// =============================================================================

/// Default attendee CSV file
pub const DEFAULT_ATTENDEES_PATH: &str = "event_attendees.csv";

/// Default credential file holding the directory API key
pub const DEFAULT_SECRET_KEY_PATH: &str = "secret.key";

/// Default letter template
pub const DEFAULT_TEMPLATE_PATH: &str = "form_letter.html";

/// Default directory for rendered letters
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default peak registration time report
pub const DEFAULT_REPORT_PATH: &str = "peak_registration_times.txt";

/// Prefix of every rendered letter file name
pub const LETTER_FILE_PREFIX: &str = "thanks";

/// Extension of every rendered letter file
pub const LETTER_FILE_EXTENSION: &str = "html";

// =============================================================================
// Legislator Directory
// =============================================================================

/// Default representatives endpoint of the civic information directory
pub const DEFAULT_LOOKUP_URL: &str =
    "https://www.googleapis.com/civicinfo/v2/representatives";

/// Default HTTP timeout for a single lookup
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Government level requested from the directory
pub const LOOKUP_LEVEL: &str = "country";

/// Roles requested from the directory
pub const LOOKUP_ROLES: &[&str] = &["legislatorUpperBody", "legislatorLowerBody"];

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment overrides applied on top of the defaults
pub mod env_vars {
    pub const ATTENDEES: &str = "EVENT_MANAGER_ATTENDEES";
    pub const SECRET_KEY: &str = "EVENT_MANAGER_SECRET_KEY";
    pub const TEMPLATE: &str = "EVENT_MANAGER_TEMPLATE";
    pub const OUTPUT_DIR: &str = "EVENT_MANAGER_OUTPUT_DIR";
    pub const REPORT: &str = "EVENT_MANAGER_REPORT";
    pub const LOOKUP_URL: &str = "EVENT_MANAGER_LOOKUP_URL";
    pub const LOOKUP_TIMEOUT_SECS: &str = "EVENT_MANAGER_LOOKUP_TIMEOUT_SECS";
}

// =============================================================================
// Peak Time Report
// =============================================================================

/// Number of peak hours listed in the report
pub const TOP_HOURS: usize = 5;

/// Number of peak weekdays listed in the report
pub const TOP_WEEKDAYS: usize = 3;

/// Title of the peak hour section
pub const PEAK_HOURS_TITLE: &str = "TOP 5 Peak Hours";

/// Title of the peak weekday section
pub const PEAK_WEEKDAYS_TITLE: &str = "TOP 3 Peak Weekdays";

// =============================================================================
// Logging
// =============================================================================

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "event_manager=info";

/// Startup banner
pub const STARTUP_BANNER: &str = "Event Manager Initialized!";
