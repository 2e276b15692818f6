//! Translation outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of the display form of a failed translation.
pub const TRANSLATION_ERROR_PREFIX: &str = "Error in translation: ";

/// Result of sending one text through the translation service.
///
/// Failures are values, not errors: the pipeline keeps going either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TranslationOutcome {
    Translated { text: String },
    Failed { reason: String },
}

impl TranslationOutcome {
    pub fn translated(text: impl Into<String>) -> Self {
        Self::Translated { text: text.into() }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The translated text, or `original` when translation failed.
    pub fn text_or<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Self::Translated { text } => text,
            Self::Failed { .. } => original,
        }
    }
}

impl fmt::Display for TranslationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translated { text } => f.write_str(text),
            Self::Failed { reason } => write!(f, "{TRANSLATION_ERROR_PREFIX}{reason}"),
        }
    }
}
