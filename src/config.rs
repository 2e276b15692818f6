//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `~/.newsverdict/config.toml` (user)
//! 3. `/etc/newsverdict/config.toml` (system)
//! 4. built-in defaults
//!
//! Secrets are loaded separately with mandatory permission checks:
//! 1. `~/.newsverdict/secrets.toml` (user, must be 0600)
//! 2. `/etc/newsverdict/secrets.toml` (system, must be 0600)
//!
//! Each key falls back to its environment variable.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::model::{
    DEFAULT_ONNX_FILE, DEFAULT_REPO_ID, DEFAULT_TOKENIZER_FILE, Device, ModelFiles, ModelSource,
};
use crate::tokenizer::MAX_LENGTH;
use crate::{Error, Result, providers};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub fact_check: FactCheckConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8501).
    #[serde(default = "default_address")]
    pub address: String,
    /// Timeout for outbound HTTP calls in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_address() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Classifier model configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// HuggingFace repository holding the ONNX export and tokenizer.
    #[serde(default = "default_repo_id")]
    pub repo_id: String,
    #[serde(default = "default_onnx_file")]
    pub onnx_file: String,
    #[serde(default = "default_tokenizer_file")]
    pub tokenizer_file: String,
    /// Local ONNX file; overrides the hub download.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Local `tokenizer.json`; overrides the hub download.
    #[serde(default)]
    pub tokenizer_path: Option<PathBuf>,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Device to use: "auto", "cpu", "cuda" or "cuda:<id>" (default: "auto").
    #[serde(default = "default_device")]
    pub device: String,
    /// Directory for model downloads.
    #[serde(default)]
    pub models_dir: Option<PathBuf>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            repo_id: default_repo_id(),
            onnx_file: default_onnx_file(),
            tokenizer_file: default_tokenizer_file(),
            model_path: None,
            tokenizer_path: None,
            max_length: default_max_length(),
            device: default_device(),
            models_dir: None,
        }
    }
}

impl ModelConfig {
    /// Model and tokenizer sources, with local paths taking precedence.
    pub fn files(&self) -> ModelFiles {
        let hub = ModelFiles::huggingface(&self.repo_id, &self.onnx_file, &self.tokenizer_file);
        ModelFiles {
            model: self
                .model_path
                .as_ref()
                .map(ModelSource::local)
                .unwrap_or(hub.model),
            tokenizer: self
                .tokenizer_path
                .as_ref()
                .map(ModelSource::local)
                .unwrap_or(hub.tokenizer),
        }
    }

    pub fn device(&self) -> Result<Device> {
        self.device.parse()
    }
}

fn default_repo_id() -> String {
    DEFAULT_REPO_ID.to_string()
}

fn default_onnx_file() -> String {
    DEFAULT_ONNX_FILE.to_string()
}

fn default_tokenizer_file() -> String {
    DEFAULT_TOKENIZER_FILE.to_string()
}

fn default_max_length() -> usize {
    MAX_LENGTH
}

fn default_device() -> String {
    "auto".to_string()
}

/// Fact-check API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FactCheckConfig {
    #[serde(default = "default_fact_check_url")]
    pub base_url: String,
    /// Optional BCP-47 language filter (e.g. "en-US").
    #[serde(default)]
    pub language_code: Option<String>,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            base_url: default_fact_check_url(),
            language_code: None,
        }
    }
}

fn default_fact_check_url() -> String {
    providers::fact_check::DEFAULT_BASE_URL.to_string()
}

/// Translation API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_translation_url")]
    pub base_url: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translation_url(),
        }
    }
}

fn default_translation_url() -> String {
    providers::google_translate::DEFAULT_BASE_URL.to_string()
}

/// Secrets configuration (API keys).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub fact_check: Option<ApiKeySecret>,
    #[serde(default)]
    pub translation: Option<ApiKeySecret>,
}

/// A single API key secret.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySecret {
    pub api_key: String,
}

/// Service name → environment variable name mapping.
const SERVICE_ENV_VARS: &[(&str, &str)] = &[
    ("fact_check", "GOOGLE_FACT_CHECK_API_KEY"),
    ("translation", "GOOGLE_TRANSLATE_API_KEY"),
];

impl Config {
    /// Load configuration from the standard locations, falling back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, if any.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(Error::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".newsverdict").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/newsverdict/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

impl Secrets {
    /// Load secrets from the standard locations with permission checks.
    ///
    /// Returns empty secrets if no file exists (keys may come from env vars).
    pub fn load() -> Result<Self> {
        // Try user secrets first
        if let Some(home) = dirs::home_dir() {
            let user_secrets = home.join(".newsverdict").join("secrets.toml");
            if user_secrets.exists() {
                return Self::load_from_file(&user_secrets);
            }
        }

        // Try system secrets
        let system_secrets = PathBuf::from("/etc/newsverdict/secrets.toml");
        if system_secrets.exists() {
            return Self::load_from_file(&system_secrets);
        }

        Ok(Secrets::default())
    }

    /// Load a secrets file, rejecting insecure permissions.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::check_permissions(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read secrets file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Configuration(format!("Failed to parse secrets file {path:?}: {e}"))
        })
    }

    /// Check that the secrets file has secure permissions (0600 or 0400).
    #[cfg(unix)]
    fn check_permissions(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| {
            Error::Configuration(format!("Failed to stat secrets file {path:?}: {e}"))
        })?;

        let mode = metadata.permissions().mode();
        // Reject if group or other bits are set
        if mode & 0o077 != 0 {
            return Err(Error::Configuration(format!(
                "Secrets file {path:?} has insecure permissions {:o}. Must be 0600 or 0400.",
                mode & 0o777
            )));
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(_path: &Path) -> Result<()> {
        Ok(())
    }

    /// Get the API key for a service, falling back to its environment variable.
    pub fn api_key(&self, service: &str) -> Option<String> {
        self.api_key_with(service, |var| std::env::var(var).ok())
    }

    fn api_key_with(&self, service: &str, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        let from_file = match service {
            "fact_check" => self.fact_check.as_ref(),
            "translation" => self.translation.as_ref(),
            _ => None,
        }
        .map(|s| s.api_key.clone())
        .filter(|key| !key.trim().is_empty());

        from_file.or_else(|| {
            SERVICE_ENV_VARS
                .iter()
                .find(|(name, _)| *name == service)
                .and_then(|(_, var)| env(var))
                .filter(|key| !key.trim().is_empty())
        })
    }

    /// The fact-check key; the application cannot run without it.
    pub fn require_fact_check_key(&self) -> Result<String> {
        self.api_key("fact_check").ok_or_else(missing_fact_check_key)
    }
}

fn missing_fact_check_key() -> Error {
    Error::Configuration(
        "Google Fact Check API key is missing. Set GOOGLE_FACT_CHECK_API_KEY or add \
         [fact_check] api_key to ~/.newsverdict/secrets.toml"
            .to_string(),
    )
}
