//! Provider traits for the three external collaborators.
//!
//! Each pipeline stage talks to one trait so the orchestration can be
//! exercised with in-process fakes:
//! - [`Translator`] never fails; failures come back as [`TranslationOutcome::Failed`]
//! - [`FactChecker`] never fails; failures come back as [`FactCheckResult::Error`]
//! - [`NewsClassifier`] propagates tokenizer/model errors to the caller

use async_trait::async_trait;

use crate::Result;
use crate::types::{Classification, FactCheckResult, TranslationOutcome};

// ============================================================================
// Translator
// ============================================================================

/// Machine translation into English.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Translate `text` into English.
    async fn translate(&self, text: &str) -> TranslationOutcome;
}

/// Translator used when no translation credentials are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTranslator;

#[async_trait]
impl Translator for DisabledTranslator {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn translate(&self, _text: &str) -> TranslationOutcome {
        TranslationOutcome::failed("translation service not configured")
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Fake/real news classification.
#[async_trait]
pub trait NewsClassifier: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Classify a title/body pair.
    async fn classify(&self, title: &str, body: &str) -> Result<Classification>;
}

// ============================================================================
// Fact checker
// ============================================================================

/// Claim search against a fact-check index.
#[async_trait]
pub trait FactChecker: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Look up claims matching `query`.
    async fn fact_check(&self, query: &str) -> FactCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_translator_reports_failure() {
        let outcome = DisabledTranslator.translate("Hallo Welt").await;
        assert!(outcome.is_failure());
        assert!(outcome.to_string().starts_with("Error in translation: "));
    }
}
