//! Google Fact Check Tools claim search client.
//!
//! See: <https://developers.google.com/fact-check/tools/api/reference/rest/v1alpha1/claims/search>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{instrument, warn};

use super::traits::FactChecker;
use crate::types::{Claim, FactCheckResult};
use crate::{Error, Result};

/// Default base URL for the Fact Check Tools API
pub const DEFAULT_BASE_URL: &str = "https://factchecktools.googleapis.com";

/// Maximum number of body characters used as a query when there is no title.
pub const BODY_QUERY_CHARS: usize = 100;

/// Query for a submission: the title when present, else the start of the body.
pub fn derive_query(title: &str, body: &str) -> String {
    if title.is_empty() {
        body.chars().take(BODY_QUERY_CHARS).collect()
    } else {
        title.to_string()
    }
}

/// Client for the `claims:search` endpoint.
#[derive(Clone)]
pub struct FactCheckClient {
    api_key: String,
    http: Client,
    base_url: String,
    language_code: Option<String>,
}

impl FactCheckClient {
    /// Create a client for the public endpoint.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, timeout)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration(
                "fact-check API key cannot be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language_code: None,
        })
    }

    /// Restrict results to a BCP-47 language code (e.g. `en-US`).
    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    /// Single best-effort search. Every failure is folded into the result.
    pub async fn search(&self, query: &str) -> FactCheckResult {
        let url = format!("{}/v1alpha1/claims:search", self.base_url);

        let mut params = vec![("query", query), ("key", self.api_key.as_str())];
        if let Some(ref code) = self.language_code {
            params.push(("languageCode", code.as_str()));
        }

        let response = match self.http.get(&url).query(&params).send().await {
            Ok(response) => response,
            Err(e) => {
                return FactCheckResult::error(
                    None,
                    format!("Unable to reach Google Fact Check API: {}", e),
                );
            }
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return FactCheckResult::error(
                    Some(status),
                    format!("Unable to read Google Fact Check API response: {}", e),
                );
            }
        };

        if status != 200 {
            return FactCheckResult::error(
                Some(status),
                format!(
                    "Unable to fetch results from Google Fact Check API. HTTP {}: {}",
                    status, text
                ),
            );
        }

        match serde_json::from_str::<SearchResponse>(&text) {
            Ok(body) => FactCheckResult::Claims(body.claims),
            Err(e) => FactCheckResult::error(
                Some(status),
                format!("Invalid Google Fact Check API response: {}", e),
            ),
        }
    }
}

impl std::fmt::Debug for FactCheckClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactCheckClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("language_code", &self.language_code)
            .finish()
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    claims: Vec<Claim>,
}

#[async_trait]
impl FactChecker for FactCheckClient {
    fn name(&self) -> &str {
        "google-fact-check"
    }

    #[instrument(skip(self))]
    async fn fact_check(&self, query: &str) -> FactCheckResult {
        let result = self.search(query).await;
        if let FactCheckResult::Error { status, message } = &result {
            warn!(?status, %message, "fact-check lookup failed");
        }
        result
    }
}
