//! Field normalisers for noisy attendee data
//!
//! Every function here is pure and total: malformed input produces a defined
//! fallback value or marker rather than an error, so a single bad cell never
//! stops a record from being processed.
//!
//! - [`zipcode`] - pad/truncate postal codes to exactly five characters
//! - [`phone`] - reduce phone numbers to ten digits or a bad number marker
//! - [`timestamp`] - parse registration times, reporting invalid input explicitly
//! - [`name`] - capitalise first names and derive letter file name stems

pub mod name;
pub mod phone;
pub mod timestamp;
pub mod zipcode;

#[cfg(test)]
pub mod tests;

pub use name::{capitalize_name, letter_file_stem};
pub use phone::normalize_phone;
pub use timestamp::{InvalidTimestamp, parse_registration_time};
pub use zipcode::normalize_zipcode;
