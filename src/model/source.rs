//! Model source and download logic.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Source for a single model artifact (ONNX graph or tokenizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// File inside a HuggingFace Hub repository.
    HuggingFace {
        /// Repository ID (e.g., "hamzab/roberta-fake-news-classification").
        repo_id: String,
        /// File within the repo (e.g., "onnx/model.onnx").
        file: String,
    },

    /// Local file.
    Local {
        path: PathBuf,
    },
}

impl ModelSource {
    /// Create a HuggingFace source for a specific file.
    pub fn huggingface(repo_id: impl Into<String>, file: impl Into<String>) -> Self {
        Self::HuggingFace {
            repo_id: repo_id.into(),
            file: file.into(),
        }
    }

    /// Create a local source.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    /// Human-readable location for logging.
    pub fn describe(&self) -> String {
        match self {
            Self::HuggingFace { repo_id, file } => format!("hf://{repo_id}/{file}"),
            Self::Local { path } => path.display().to_string(),
        }
    }

    /// Download or resolve the artifact to a local path.
    ///
    /// HuggingFace files are cached under `cache_dir` when given, otherwise in
    /// the hub's default cache.
    #[cfg(feature = "local-inference")]
    pub fn resolve(&self, cache_dir: Option<&Path>) -> Result<PathBuf> {
        match self {
            Self::HuggingFace { repo_id, file } => {
                let mut builder = hf_hub::api::sync::ApiBuilder::new();
                if let Some(dir) = cache_dir {
                    builder = builder.with_cache_dir(dir.to_path_buf());
                }
                let api = builder.build().map_err(|e| {
                    Error::Configuration(format!("Failed to initialize HF API: {}", e))
                })?;

                api.model(repo_id.clone()).get(file).map_err(|e| {
                    Error::Configuration(format!(
                        "Failed to download {} from {}: {}",
                        file, repo_id, e
                    ))
                })
            }
            Self::Local { path } => Self::check_local(path),
        }
    }

    fn check_local(path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::Configuration(format!(
                "Local model path does not exist: {}",
                path.display()
            )));
        }
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_sources() {
        let hub = ModelSource::huggingface("org/model", "onnx/model.onnx");
        assert_eq!(hub.describe(), "hf://org/model/onnx/model.onnx");

        let local = ModelSource::local("/opt/models/model.onnx");
        assert_eq!(local.describe(), "/opt/models/model.onnx");
    }

    #[test]
    fn missing_local_file_is_configuration_error() {
        let err = ModelSource::check_local(Path::new("/nonexistent/model.onnx")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn existing_local_file_resolves() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let resolved = ModelSource::check_local(file.path()).unwrap();
        assert_eq!(resolved, file.path());
    }
}
