//! Road-name address lookup client
//!
//! Wraps the juso.go.kr address search API behind a small trait so the
//! enricher can be exercised without network access. Every failure mode
//! (provider error code, empty result set, missing road address, network
//! or decode error) collapses into a reason string; the client never
//! escalates a lookup problem into a crate error.

use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use crate::constants::{JUSO_API_URL, LOOKUP_RESULTS_PER_PAGE, lookup_reasons};
use crate::{Error, Result};

/// Outcome of one lookup: a canonical road address or a failure reason
pub type LookupOutcome = std::result::Result<String, String>;

/// Canonical road-name address resolution
pub trait AddressLookup {
    /// Resolve a free-text address keyword to a canonical road address
    fn resolve(&self, keyword: &str) -> impl Future<Output = LookupOutcome> + Send;
}

/// HTTP client for the juso.go.kr road-address search endpoint
#[derive(Debug, Clone)]
pub struct JusoClient {
    http: reqwest::Client,
    api_key: String,
}

impl JusoClient {
    /// Create a client with the given credential and per-request timeout
    pub fn new(api_key: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| Error::address_lookup(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }
}

impl AddressLookup for JusoClient {
    async fn resolve(&self, keyword: &str) -> LookupOutcome {
        let count_per_page = LOOKUP_RESULTS_PER_PAGE.to_string();
        let params = [
            ("currentPage", "1"),
            ("countPerPage", count_per_page.as_str()),
            ("keyword", keyword),
            ("confmKey", self.api_key.as_str()),
            ("resultType", "json"),
        ];

        let response = self
            .http
            .get(JUSO_API_URL)
            .query(&params)
            .send()
            .await
            .map_err(|e| format!("API 예외: {}", e))?;

        let body: JusoResponse = response
            .json()
            .await
            .map_err(|e| format!("API 예외: {}", e))?;

        interpret_response(body)
    }
}

/// Top-level search response
#[derive(Debug, Deserialize)]
struct JusoResponse {
    #[serde(default)]
    results: Option<JusoResults>,
}

#[derive(Debug, Deserialize)]
struct JusoResults {
    #[serde(default)]
    common: Option<JusoCommon>,
    #[serde(default)]
    juso: Option<Vec<JusoEntry>>,
}

#[derive(Debug, Deserialize)]
struct JusoCommon {
    #[serde(rename = "errorCode", default)]
    error_code: Option<String>,
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JusoEntry {
    #[serde(rename = "roadAddr", default)]
    road_addr: String,
}

/// Map a decoded provider response to an outcome
fn interpret_response(body: JusoResponse) -> LookupOutcome {
    let results = body
        .results
        .ok_or_else(|| lookup_reasons::PROVIDER_ERROR.to_string())?;

    let error_code = results
        .common
        .as_ref()
        .and_then(|c| c.error_code.as_deref())
        .unwrap_or("");
    if error_code != "0" {
        let message = results
            .common
            .as_ref()
            .and_then(|c| c.error_message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| lookup_reasons::PROVIDER_ERROR.to_string());
        return Err(message);
    }

    let entries = results.juso.unwrap_or_default();
    let best = entries
        .first()
        .ok_or_else(|| lookup_reasons::NO_RESULTS.to_string())?;

    let road_addr = best.road_addr.trim();
    if road_addr.is_empty() {
        return Err(lookup_reasons::NO_ROAD_ADDRESS.to_string());
    }

    Ok(road_addr.to_string())
}
