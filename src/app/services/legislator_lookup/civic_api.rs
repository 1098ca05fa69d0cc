//! HTTP client for the civic information representatives endpoint

use super::LegislatorLookup;
use crate::app::models::Legislator;
use crate::config::LookupConfig;
use crate::constants::{LOOKUP_LEVEL, LOOKUP_ROLES};
use crate::{Error, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// Body of a representatives response; only the officials are used
#[derive(Debug, Deserialize)]
struct RepresentativesResponse {
    #[serde(default)]
    officials: Vec<Legislator>,
}

/// Extract the officials from a representatives response body
pub fn parse_officials(body: &str) -> Result<Vec<Legislator>> {
    let response: RepresentativesResponse = serde_json::from_str(body)?;
    Ok(response.officials)
}

/// Blocking lookup against the civic information directory
///
/// Each call is a single request with the configured timeout. Transport
/// errors, non-success statuses and malformed bodies all surface as
/// [`Error::Lookup`].
#[derive(Debug, Clone)]
pub struct CivicApiLookup {
    client: Client,
    url: String,
    api_key: String,
}

impl CivicApiLookup {
    /// Create a client for the configured endpoint
    pub fn new(config: &LookupConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            api_key: api_key.into(),
        })
    }

    /// Query parameters for one postal code
    fn query<'a>(&'a self, zipcode: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut query = vec![("address", zipcode), ("levels", LOOKUP_LEVEL)];
        query.extend(LOOKUP_ROLES.iter().map(|role| ("roles", *role)));
        query.push(("key", self.api_key.as_str()));
        query
    }
}

impl LegislatorLookup for CivicApiLookup {
    fn legislators_by_zipcode(&self, zipcode: &str) -> Result<Vec<Legislator>> {
        debug!("Looking up legislators for {}", zipcode);

        let response = self.client.get(&self.url).query(&self.query(zipcode)).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::lookup(format!(
                "directory answered {} for postal code {}",
                status, zipcode
            )));
        }

        parse_officials(&response.text()?)
    }
}
