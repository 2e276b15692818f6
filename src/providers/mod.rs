//! Provider implementations for the pipeline's external collaborators.
//!
//! - Google Translate for non-English input
//! - Google Fact Check Tools for claim lookup
//! - a local ONNX model for fake/real classification

pub mod fact_check;
pub mod google_translate;
#[cfg(feature = "local-inference")]
pub mod onnx_classifier;
pub mod traits;

pub use fact_check::{FactCheckClient, derive_query};
pub use google_translate::GoogleTranslateClient;
#[cfg(feature = "local-inference")]
pub use onnx_classifier::OnnxNewsClassifier;
pub use traits::{DisabledTranslator, FactChecker, NewsClassifier, Translator};
