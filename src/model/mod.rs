//! Model management and loading infrastructure.

pub mod device;
pub mod source;

pub use device::Device;
pub use source::ModelSource;

/// Default classifier repository on the HuggingFace Hub.
pub const DEFAULT_REPO_ID: &str = "hamzab/roberta-fake-news-classification";

/// Default path of the ONNX export inside the repository.
pub const DEFAULT_ONNX_FILE: &str = "onnx/model.onnx";

/// Default tokenizer file inside the repository.
pub const DEFAULT_TOKENIZER_FILE: &str = "tokenizer.json";

/// Where the classifier graph and its tokenizer come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    pub model: ModelSource,
    pub tokenizer: ModelSource,
}

impl ModelFiles {
    /// Both artifacts from one hub repository.
    pub fn huggingface(
        repo_id: impl Into<String>,
        onnx_file: impl Into<String>,
        tokenizer_file: impl Into<String>,
    ) -> Self {
        let repo_id = repo_id.into();
        Self {
            model: ModelSource::huggingface(repo_id.clone(), onnx_file),
            tokenizer: ModelSource::huggingface(repo_id, tokenizer_file),
        }
    }

    /// Display name used in logs: the repo ID or the model file stem.
    pub fn name(&self) -> String {
        match &self.model {
            ModelSource::HuggingFace { repo_id, .. } => repo_id.clone(),
            ModelSource::Local { path } => path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("custom")
                .to_string(),
        }
    }
}

impl Default for ModelFiles {
    fn default() -> Self {
        Self::huggingface(DEFAULT_REPO_ID, DEFAULT_ONNX_FILE, DEFAULT_TOKENIZER_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_files_point_at_fake_news_model() {
        let files = ModelFiles::default();
        assert_eq!(files.name(), DEFAULT_REPO_ID);
        assert_eq!(
            files.tokenizer,
            ModelSource::huggingface(DEFAULT_REPO_ID, "tokenizer.json")
        );
    }

    #[test]
    fn local_name_is_file_stem() {
        let files = ModelFiles {
            model: ModelSource::local("/path/to/roberta-fake.onnx"),
            tokenizer: ModelSource::local("/path/to/tokenizer.json"),
        };
        assert_eq!(files.name(), "roberta-fake");
    }
}
