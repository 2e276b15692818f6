//! Per-submission report handed to the presenters.

use serde::{Deserialize, Serialize};

use super::{Classification, FactCheckResult, Language, TranslationOutcome, Verdict};

/// Everything the presenters need to render one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Title actually classified (translated when translation succeeded).
    pub title: String,
    /// Body actually classified.
    pub body: String,
    pub language: Language,
    /// Translation outcomes for title and body, when translation ran.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<TranslationOutcome>,
    pub classification: Classification,
    pub verdict: Verdict,
    /// Query sent to the fact-check service (empty when the lookup was skipped).
    pub query: String,
    pub fact_check: FactCheckResult,
}

impl Report {
    /// Display strings of failed translations.
    pub fn translation_errors(&self) -> Vec<String> {
        self.translations
            .iter()
            .filter(|t| t.is_failure())
            .map(ToString::to_string)
            .collect()
    }
}
