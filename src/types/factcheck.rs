//! Fact-check search types.
//!
//! Field names follow the Google Fact Check Tools `claims:search` JSON.

use serde::{Deserialize, Serialize};

const MISSING: &str = "N/A";
const MISSING_URL: &str = "#";

/// Outcome of a fact-check lookup.
///
/// Exactly one of: an error, or a (possibly empty) claim list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactCheckResult {
    Claims(Vec<Claim>),
    Error {
        /// HTTP status, when the service answered at all.
        status: Option<u16>,
        message: String,
    },
}

impl FactCheckResult {
    pub fn error(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Error {
            status,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Claims found, or `None` for an error result.
    pub fn claims(&self) -> Option<&[Claim]> {
        match self {
            Self::Claims(claims) => Some(claims),
            Self::Error { .. } => None,
        }
    }
}

/// A factual assertion returned by the search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claimant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_date: Option<String>,
    #[serde(default)]
    pub claim_review: Vec<ClaimReview>,
}

impl Claim {
    pub fn text_or_default(&self) -> &str {
        self.text.as_deref().unwrap_or(MISSING)
    }
}

/// A publisher's assessment of a [`Claim`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textual_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl ClaimReview {
    pub fn publisher_name(&self) -> &str {
        self.publisher
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or(MISSING)
    }

    pub fn rating(&self) -> &str {
        self.textual_rating.as_deref().unwrap_or(MISSING)
    }

    pub fn link(&self) -> &str {
        self.url.as_deref().unwrap_or(MISSING_URL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}
