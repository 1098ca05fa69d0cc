//! Legislator directory lookup
//!
//! The pipeline only sees the [`LegislatorLookup`] trait. Production runs use
//! [`CivicApiLookup`], which queries the civic information directory over
//! HTTP; tests pass closures or small stubs instead.

pub mod civic_api;
pub mod credentials;

pub use civic_api::{CivicApiLookup, parse_officials};
pub use credentials::load_api_key;

use crate::Result;
use crate::app::models::Legislator;

/// Source of the legislators representing a postal code
///
/// Implementations may fail for any reason; the pipeline turns every failure
/// into the fixed fallback message, so errors here never abort a run.
pub trait LegislatorLookup {
    /// Officials for a normalised five character postal code
    fn legislators_by_zipcode(&self, zipcode: &str) -> Result<Vec<Legislator>>;
}

impl<F> LegislatorLookup for F
where
    F: Fn(&str) -> Result<Vec<Legislator>>,
{
    fn legislators_by_zipcode(&self, zipcode: &str) -> Result<Vec<Legislator>> {
        self(zipcode)
    }
}
