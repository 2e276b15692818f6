//! Form submission types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Language selected on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    #[default]
    English,
    /// Anything else; translated to English before classification.
    Other,
}

impl Language {
    /// Form value for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Self::English),
            "other" => Ok(Self::Other),
            _ => Err(Error::InvalidInput(format!("unknown language: {s:?}"))),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single news item submitted through the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub language: Language,
}

impl Submission {
    pub fn new(title: impl Into<String>, body: impl Into<String>, language: Language) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            language,
        }
    }

    pub fn language_is_english(&self) -> bool {
        self.language == Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language_case_insensitive() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" OTHER ".parse::<Language>().unwrap(), Language::Other);
    }

    #[test]
    fn parse_unknown_language_is_invalid_input() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert!(err.is_user_error());
        assert!(err.to_string().contains("Klingon"));
    }

    #[test]
    fn submission_language_flag() {
        assert!(Submission::new("t", "b", Language::English).language_is_english());
        assert!(!Submission::new("t", "b", Language::Other).language_is_english());
    }

    #[test]
    fn submission_json_defaults_to_english() {
        let sub: Submission = serde_json::from_str(r#"{"title":"T","body":"B"}"#).unwrap();
        assert_eq!(sub.language, Language::English);
    }

    #[test]
    fn submission_json_language_is_case_insensitive() {
        let sub: Submission =
            serde_json::from_str(r#"{"title":"T","body":"B","language":"other"}"#).unwrap();
        assert_eq!(sub.language, Language::Other);
    }

    #[test]
    fn submission_json_unknown_language_fails() {
        let err = serde_json::from_str::<Submission>(
            r#"{"title":"T","body":"B","language":"Klingon"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Klingon"));
    }

    #[test]
    fn language_serializes_as_form_value() {
        assert_eq!(serde_json::to_string(&Language::Other).unwrap(), "\"Other\"");
    }
}
