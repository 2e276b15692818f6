//! newsverdict - fake news prediction with translation and fact-check lookup
//!
//! A submission (title, body, language) flows through four stages:
//! optional machine translation to English, a RoBERTa sequence classifier
//! run locally through ONNX Runtime, a Google Fact Check claims lookup, and
//! a presenter that renders the [`Report`] as HTML, text or JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use newsverdict::{Config, Language, Pipeline, Secrets, Submission};
//!
//! #[tokio::main]
//! async fn main() -> newsverdict::Result<()> {
//!     let config = Config::load(None)?;
//!     let secrets = Secrets::load()?;
//!
//!     let pipeline = Pipeline::builder()
//!         .remote_services(&config, &secrets)?
//!         .local_classifier(&config)?
//!         .build()?;
//!
//!     let report = pipeline
//!         .run(Submission::new("Moon made of cheese", "", Language::English))
//!         .await?;
//!
//!     print!("{}", newsverdict::present::render_text(&report));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod present;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod tokenizer;
pub mod types;
pub mod version;

pub use config::{Config, Secrets};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use version::{PKG_VERSION, version_string};

pub use model::{Device, ModelFiles, ModelSource};
#[cfg(feature = "local-inference")]
pub use tokenizer::HfTokenizer;

pub use types::{
    Claim, ClaimReview, Classification, FactCheckResult, Language, Publisher, Report,
    Submission, TranslationOutcome, Verdict,
};
