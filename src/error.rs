//! newsverdict error types

/// newsverdict error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Provider/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Model errors
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl Error {
    /// Whether the error came from the submitted data rather than the system.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Result type alias for newsverdict operations
pub type Result<T> = std::result::Result<T, Error>;
