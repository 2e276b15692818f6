//! Local fake-news classification via ONNX Runtime.
//!
//! Runs a RoBERTa sequence-classification export with two output logits
//! (`Fake`, `Real`). The session and tokenizer are loaded once and shared;
//! each call encodes the sentinel-framed input and applies softmax.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use tracing::{debug, info, instrument};

use super::traits::NewsClassifier;
use crate::error::{Error, Result};
use crate::model::{Device, ModelFiles};
use crate::tokenizer::{EncodedInput, HfTokenizer, InputEncoder, frame_input};
use crate::types::{Classification, LABELS};

/// Local classifier backed by an ONNX session.
///
/// Cloning is cheap: clones share the same session and tokenizer.
#[derive(Clone)]
pub struct OnnxNewsClassifier {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    // `Session::run` needs exclusive access.
    session: Mutex<Session>,
    encoder: Box<dyn InputEncoder>,
}

impl OnnxNewsClassifier {
    /// Resolve (downloading if needed) and load the model and tokenizer.
    pub fn load(
        files: &ModelFiles,
        device: Device,
        max_length: usize,
        cache_dir: Option<&Path>,
    ) -> Result<Self> {
        let model_path = files.model.resolve(cache_dir)?;
        let tokenizer_path = files.tokenizer.resolve(cache_dir)?;

        let session = build_session(&model_path, &device)?;
        let encoder = HfTokenizer::from_file(&tokenizer_path, max_length)?;

        info!(
            model = %files.model.describe(),
            tokenizer = %files.tokenizer.describe(),
            device = device.name(),
            max_length,
            "fake-news classifier loaded"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                name: files.name(),
                session: Mutex::new(session),
                encoder: Box::new(encoder),
            }),
        })
    }

    /// Blocking classification of a title/body pair.
    pub fn classify_blocking(&self, title: &str, body: &str) -> Result<Classification> {
        let framed = frame_input(title, body);
        let encoded = self.inner.encoder.encode(&framed)?;
        debug!(tokens = encoded.attended(), "encoded classifier input");

        let logits = self.run_inference(&encoded)?;
        logits_to_classification(&logits)
    }

    /// Run the ONNX session and return the logits of the single batch row.
    fn run_inference(&self, encoded: &EncodedInput) -> Result<Vec<f32>> {
        use ort::value::TensorRef;

        let shape = [1_usize, encoded.len()];

        let input_ids_tensor = TensorRef::from_array_view((shape, encoded.input_ids.as_slice()))
            .map_err(|e| Error::Inference(format!("Failed to create input_ids tensor: {}", e)))?;

        let attention_mask_tensor =
            TensorRef::from_array_view((shape, encoded.attention_mask.as_slice())).map_err(
                |e| Error::Inference(format!("Failed to create attention_mask tensor: {}", e)),
            )?;

        let mut session = lock_session(&self.inner.session);

        let outputs = session
            .run(ort::inputs![
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
            ])
            .map_err(|e| Error::Inference(format!("ONNX inference failed: {}", e)))?;

        let logits = outputs
            .get("logits")
            .ok_or_else(|| Error::Inference("No logits output found".to_string()))?;

        // try_extract_tensor returns (&Shape, &[T])
        let (_shape, logits_data) = logits
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference(format!("Failed to extract logits: {}", e)))?;

        Ok(logits_data.to_vec())
    }
}

#[async_trait]
impl NewsClassifier for OnnxNewsClassifier {
    fn name(&self) -> &str {
        &self.inner.name
    }

    #[instrument(skip_all, fields(model = %self.inner.name))]
    async fn classify(&self, title: &str, body: &str) -> Result<Classification> {
        let classifier = self.clone();
        let title = title.to_owned();
        let body = body.to_owned();

        tokio::task::spawn_blocking(move || classifier.classify_blocking(&title, &body))
            .await
            .map_err(|e| Error::Inference(format!("Classification task failed: {}", e)))?
    }
}

/// The session keeps no per-request state; a lock poisoned by a panicked
/// inference is recovered.
fn lock_session<T>(session: &Mutex<T>) -> MutexGuard<'_, T> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Convert the `[fake, real]` logits of one row into probabilities.
fn logits_to_classification(logits: &[f32]) -> Result<Classification> {
    match logits {
        [fake, real] => Ok(Classification::from_logits(*fake, *real)),
        _ => Err(Error::Inference(format!(
            "Expected {} logits, got {}",
            LABELS.len(),
            logits.len()
        ))),
    }
}

/// Build an ONNX session with the appropriate execution provider.
fn build_session(model_path: &Path, device: &Device) -> Result<Session> {
    let builder = Session::builder()
        .map_err(|e| Error::Configuration(format!("Failed to create session builder: {}", e)))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| Error::Configuration(format!("Failed to set optimization level: {}", e)))?;

    // Configure execution provider based on device
    let builder = match device {
        Device::Cpu => builder,
        #[cfg(feature = "cuda")]
        Device::Cuda { device_id } => {
            use ort::execution_providers::CUDAExecutionProvider;
            builder
                .with_execution_providers([CUDAExecutionProvider::default()
                    .with_device_id(*device_id as i32)
                    .build()])
                .map_err(|e| Error::Configuration(format!("Failed to configure CUDA: {}", e)))?
        }
    };

    builder
        .commit_from_file(model_path)
        .map_err(|e| Error::Configuration(format!("Failed to load ONNX model: {}", e)))
}
