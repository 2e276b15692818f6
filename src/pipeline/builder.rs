//! Builder for [`Pipeline`].

use std::sync::Arc;

use tracing::{info, warn};

use super::Pipeline;
use crate::config::{Config, Secrets};
use crate::providers::{
    DisabledTranslator, FactCheckClient, FactChecker, GoogleTranslateClient, NewsClassifier,
    Translator,
};
use crate::{Error, Result};

/// Builder for a [`Pipeline`].
///
/// Classifier and fact checker are mandatory; without a translator,
/// non-English submissions are classified untranslated.
#[derive(Default)]
pub struct PipelineBuilder {
    translator: Option<Arc<dyn Translator>>,
    classifier: Option<Arc<dyn NewsClassifier>>,
    fact_checker: Option<Arc<dyn FactChecker>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn NewsClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn fact_checker(mut self, fact_checker: Arc<dyn FactChecker>) -> Self {
        self.fact_checker = Some(fact_checker);
        self
    }

    /// Configure the HTTP-backed collaborators from config and secrets.
    ///
    /// Fails when the fact-check key is missing.
    pub fn remote_services(mut self, config: &Config, secrets: &Secrets) -> Result<Self> {
        let timeout = config.server.request_timeout();

        let api_key = secrets.require_fact_check_key()?;
        let mut fact_checker =
            FactCheckClient::with_base_url(api_key, &config.fact_check.base_url, timeout)?;
        if let Some(ref code) = config.fact_check.language_code {
            fact_checker = fact_checker.language_code(code);
        }
        self.fact_checker = Some(Arc::new(fact_checker));

        let translator: Arc<dyn Translator> = match secrets.api_key("translation") {
            Some(key) => Arc::new(GoogleTranslateClient::with_base_url(
                key,
                &config.translation.base_url,
                timeout,
            )?),
            None => {
                warn!("no translation API key configured; non-English input will not be translated");
                Arc::new(DisabledTranslator)
            }
        };
        self.translator = Some(translator);

        Ok(self)
    }

    /// Load the local ONNX classifier described by `config`.
    #[cfg(feature = "local-inference")]
    pub fn local_classifier(mut self, config: &Config) -> Result<Self> {
        let model = &config.model;
        let classifier = crate::providers::OnnxNewsClassifier::load(
            &model.files(),
            model.device()?,
            model.max_length,
            model.models_dir.as_deref(),
        )?;
        self.classifier = Some(Arc::new(classifier));
        Ok(self)
    }

    pub fn build(self) -> Result<Pipeline> {
        let classifier = self
            .classifier
            .ok_or_else(|| Error::Configuration("no classifier configured".to_string()))?;
        let fact_checker = self
            .fact_checker
            .ok_or_else(|| Error::Configuration("no fact checker configured".to_string()))?;
        let translator = self
            .translator
            .unwrap_or_else(|| Arc::new(DisabledTranslator) as Arc<dyn Translator>);

        let pipeline = Pipeline::new(translator, classifier, fact_checker);
        let [translator, classifier, fact_checker] = pipeline.provider_names();
        info!(translator, classifier, fact_checker, "pipeline ready");
        Ok(pipeline)
    }
}
