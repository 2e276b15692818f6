//! Submission pipeline.
//!
//! One submission flows strictly in order:
//! translate (non-English only) → classify → fact-check → [`Report`].
//! Nothing is retained between submissions.

mod builder;

pub use builder::PipelineBuilder;

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument, warn};

use crate::Result;
use crate::providers::{FactChecker, NewsClassifier, Translator, derive_query};
use crate::telemetry;
use crate::types::{FactCheckResult, Language, Report, Submission, TranslationOutcome};

/// The four-stage transform applied to every submission.
#[derive(Clone)]
pub struct Pipeline {
    translator: Arc<dyn Translator>,
    classifier: Arc<dyn NewsClassifier>,
    fact_checker: Arc<dyn FactChecker>,
}

impl Pipeline {
    pub fn new(
        translator: Arc<dyn Translator>,
        classifier: Arc<dyn NewsClassifier>,
        fact_checker: Arc<dyn FactChecker>,
    ) -> Self {
        Self {
            translator,
            classifier,
            fact_checker,
        }
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Names of the configured providers, for logging.
    pub fn provider_names(&self) -> [&str; 3] {
        [
            self.translator.name(),
            self.classifier.name(),
            self.fact_checker.name(),
        ]
    }

    /// Run one submission through every stage.
    ///
    /// Only classifier failures are returned as errors; translation and
    /// fact-check failures are carried inside the [`Report`].
    #[instrument(skip_all, fields(language = %submission.language))]
    pub async fn run(&self, submission: Submission) -> Result<Report> {
        let result = self.run_stages(submission).await;
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::SUBMISSIONS_TOTAL, "status" => status).increment(1);
        result
    }

    async fn run_stages(&self, submission: Submission) -> Result<Report> {
        let Submission {
            title,
            body,
            language,
        } = submission;

        let mut translations = Vec::new();
        let (title, body) = match language {
            Language::English => (title, body),
            Language::Other => {
                let start = Instant::now();
                let title_outcome = self.translate(&title).await;
                let body_outcome = self.translate(&body).await;
                record_stage("translate", start);

                let translated = (
                    title_outcome.text_or(&title).to_string(),
                    body_outcome.text_or(&body).to_string(),
                );
                translations.push(title_outcome);
                translations.push(body_outcome);
                translated
            }
        };

        let start = Instant::now();
        let classification = self.classifier.classify(&title, &body).await;
        record_stage("classify", start);
        let classification = classification?;
        let verdict = classification.verdict();
        info!(
            fake = classification.fake,
            real = classification.real,
            verdict = verdict.as_str(),
            "classified submission"
        );

        let query = derive_query(&title, &body);
        let fact_check = if query.is_empty() {
            FactCheckResult::error(None, "Nothing to fact-check: title and text are both empty.")
        } else {
            let start = Instant::now();
            let result = self.fact_checker.fact_check(&query).await;
            record_stage("fact_check", start);
            result
        };
        if fact_check.is_error() {
            metrics::counter!(telemetry::FACT_CHECK_ERRORS_TOTAL).increment(1);
        }

        Ok(Report {
            title,
            body,
            language,
            translations,
            classification,
            verdict,
            query,
            fact_check,
        })
    }

    async fn translate(&self, text: &str) -> TranslationOutcome {
        let outcome = self.translator.translate(text).await;
        if outcome.is_failure() {
            warn!(provider = self.translator.name(), "{outcome}; using original text");
            metrics::counter!(telemetry::TRANSLATION_FAILURES_TOTAL).increment(1);
        }
        outcome
    }
}

fn record_stage(stage: &'static str, start: Instant) {
    metrics::histogram!(telemetry::STAGE_DURATION_SECONDS, "stage" => stage)
        .record(start.elapsed().as_secs_f64());
}
