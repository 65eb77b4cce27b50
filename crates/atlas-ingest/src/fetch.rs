//! One-time HTTP fetch of the country dataset.

use std::time::Duration;

use tracing::info;

use atlas_model::CountryRecord;

use crate::error::{IngestError, Result};
use crate::wire::{self, RawCountry};

/// Default API endpoint; overridable for tests and mirrors.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// Field projection sent to the API. The v3.1 `/all` endpoint requires one
/// and rejects unprojected requests with HTTP 400.
const FIELDS: &str = "name,capital,population,area,continents,subregion,flags,cca3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("atlas/", env!("CARGO_PKG_VERSION"));

/// Fetch and normalize the full country dataset from `<base_url>/v3.1/all`.
///
/// Synchronous by design: this is the only blocking boundary in the system,
/// and it happens once per session before the pipeline ever runs.
pub fn fetch_countries(base_url: &str) -> Result<Vec<CountryRecord>> {
    let url = format!(
        "{}/v3.1/all?fields={FIELDS}",
        base_url.trim_end_matches('/')
    );
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| IngestError::Request {
            url: url.clone(),
            source,
        })?;

    let response = client
        .get(&url)
        .send()
        .map_err(|source| IngestError::Request {
            url: url.clone(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status { url, status });
    }

    let body = response.text().map_err(|source| IngestError::Request {
        url: url.clone(),
        source,
    })?;
    let raw: Vec<RawCountry> = serde_json::from_str(&body)?;
    let records = wire::normalize(raw);
    info!(url, count = records.len(), "fetched country dataset");
    Ok(records)
}
