//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! Only the `name/{name}` lookup is used. Each lookup is one blocking request with a
//! fixed timeout; there are no retries. [`Client::fetch`] runs lookups one after the
//! other and skips names that fail, so one bad name never aborts a batch.
//!
//! Typical usage:
//! ```no_run
//! # use countries_xml::Client;
//! let client = Client::default();
//! let records = client.fetch(&["india".into(), "japan".into()]);
//! assert!(records.len() <= 2);
//! ```
use crate::models::CountryRecord;
use log::{info, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Public endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the API; everything else is dropped server-side.
pub const FIELDS: &str = "name,cca2,currencies,capital,region";

/// Name looked up by the connectivity check.
pub const CONNECTIVITY_COUNTRY: &str = "india";

/// Per-request timeout. A lookup that exceeds it counts as a failure for that name.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a single lookup produced no record.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with HTTP {0}")]
    Status(StatusCode),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("no match found")]
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

// Keep -, _, . unescaped; spaces and non-ASCII names are percent-encoded.
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

impl Client {
    /// Client pointed at another deployment (or a local stub in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Same as [`Client::with_base_url`] with a custom per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(timeout)
            .redirect(Policy::limited(5))
            .user_agent(concat!("countries-xml/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// URL of the lookup for `name`.
    pub fn lookup_url(&self, name: &str) -> String {
        let enc = percent_encoding::utf8_percent_encode(name.trim(), SAFE);
        format!("{}/name/{}?fields={}", self.base_url, enc, FIELDS)
    }

    /// Look up one country by name and return the first matching record.
    ///
    /// ### Errors
    /// - transport failure or timeout
    /// - non-success HTTP status (the API answers 404 for unknown names)
    /// - body that is not a JSON array of objects
    /// - empty result array (`LookupError::NotFound`)
    pub fn lookup(&self, name: &str) -> Result<CountryRecord, LookupError> {
        let url = self.lookup_url(name);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        let v: Value = resp
            .json()
            .map_err(|e| LookupError::Decode(format!("decode json: {e}")))?;
        first_record(v)
    }

    /// Look up every name in order, skipping (and logging) the ones that fail.
    ///
    /// The result keeps the order of successful lookups. Repeated names are fetched
    /// repeatedly.
    pub fn fetch(&self, names: &[String]) -> Vec<CountryRecord> {
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            info!("fetching data for: {name}");
            match self.lookup(name) {
                Ok(record) => {
                    info!("fetched: {name}");
                    out.push(record);
                }
                Err(LookupError::NotFound) => warn!("no data found for: {name}"),
                Err(e) => warn!("error fetching {name}: {e}"),
            }
        }
        out
    }

    /// Single connectivity check. `Ok(())` only on a 2xx answer.
    pub fn ping(&self) -> Result<(), LookupError> {
        info!("testing API connectivity...");
        let resp = self.http.get(self.lookup_url(CONNECTIVITY_COUNTRY)).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        info!("API is accessible");
        Ok(())
    }
}

/// Take the first element of a lookup response (`[record, ...]`).
pub fn first_record(v: Value) -> Result<CountryRecord, LookupError> {
    let Value::Array(items) = v else {
        return Err(LookupError::Decode("not a top-level array".into()));
    };
    let first = items.into_iter().next().ok_or(LookupError::NotFound)?;
    if !first.is_object() {
        return Err(LookupError::Decode("array element is not an object".into()));
    }
    serde_json::from_value(first).map_err(|e| LookupError::Decode(format!("parse record: {e}")))
}
