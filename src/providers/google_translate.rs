//! Google Translate API v2 client.
//!
//! Translates arbitrary text into English with the source language
//! auto-detected. See: <https://cloud.google.com/translate/docs/reference/rest/v2/translate>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::traits::Translator;
use crate::types::TranslationOutcome;
use crate::{Error, Result};

/// Default base URL for Google Translate
pub const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com";

const TARGET_LANGUAGE: &str = "en";

/// Client for the Google Translate v2 REST API.
#[derive(Clone)]
pub struct GoogleTranslateClient {
    api_key: String,
    http: Client,
    base_url: String,
}

impl GoogleTranslateClient {
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
                "translation API key cannot be empty".to_string(),
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
        })
    }

    /// Translate `text` into English, surfacing failures as errors.
    pub async fn translate_to_english(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let url = format!("{}/language/translate/v2", self.base_url);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&TranslateRequest {
                q: text,
                target: TARGET_LANGUAGE,
                format: "text",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response.json().await?;

        body.data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                Error::Api {
                    status: status.as_u16(),
                    message: "Invalid API response: empty 'data.translations' array".to_string(),
                }
            })
    }
}

impl std::fmt::Debug for GoogleTranslateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    fn name(&self) -> &str {
        "google-translate"
    }

    #[instrument(skip_all, fields(chars = text.chars().count()))]
    async fn translate(&self, text: &str) -> TranslationOutcome {
        match self.translate_to_english(text).await {
            Ok(translated) => TranslationOutcome::translated(translated),
            Err(e) => {
                warn!(error = %e, "translation failed");
                TranslationOutcome::failed(e.to_string())
            }
        }
    }
}
