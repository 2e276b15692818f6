//! HuggingFace tokenizers implementation.

use std::path::Path;

use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

use super::{EncodedInput, InputEncoder};
use crate::error::{Error, Result};

/// Padding token of RoBERTa-family vocabularies.
const PAD_TOKEN: &str = "<pad>";

/// HuggingFace tokenizer configured for fixed-length classifier input.
///
/// Every encoding is truncated and padded to exactly `max_length` tokens.
pub struct HfTokenizer {
    inner: Tokenizer,
}

impl HfTokenizer {
    /// Load tokenizer from a local `tokenizer.json`.
    pub fn from_file(path: &Path, max_length: usize) -> Result<Self> {
        let inner = Tokenizer::from_file(path).map_err(|e| {
            Error::Configuration(format!("Failed to load tokenizer from {:?}: {}", path, e))
        })?;

        Self::from_tokenizer(inner, max_length)
    }

    /// Wrap an already-loaded tokenizer.
    pub fn from_tokenizer(mut inner: Tokenizer, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::Configuration(
                "max_length must be greater than zero".to_string(),
            ));
        }

        let pad_id = inner.token_to_id(PAD_TOKEN).ok_or_else(|| {
            Error::Configuration(format!("Tokenizer vocabulary has no {PAD_TOKEN} token"))
        })?;

        inner
            .with_truncation(Some(TruncationParams {
                max_length,
                ..Default::default()
            }))
            .map_err(|e| Error::Configuration(format!("Failed to configure truncation: {}", e)))?;

        inner.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::Fixed(max_length),
            pad_id,
            pad_token: PAD_TOKEN.to_string(),
            ..Default::default()
        }));

        Ok(Self { inner })
    }
}

impl InputEncoder for HfTokenizer {
    fn encode(&self, text: &str) -> Result<EncodedInput> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| Error::Tokenization(e.to_string()))?;

        let input_ids = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        Ok(EncodedInput {
            input_ids,
            attention_mask,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const TOKENIZER_JSON: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": { "<unk>": 0, "<pad>": 1, "hello": 2, "world": 3 },
            "unk_token": "<unk>"
        }
    }"#;

    fn tokenizer(max_length: usize) -> HfTokenizer {
        let inner = Tokenizer::from_str(TOKENIZER_JSON).unwrap();
        HfTokenizer::from_tokenizer(inner, max_length).unwrap()
    }

    #[test]
    fn short_input_is_padded() {
        let encoded = tokenizer(6).encode("hello world").unwrap();
        assert_eq!(encoded.input_ids, vec![2, 3, 1, 1, 1, 1]);
        assert_eq!(encoded.attention_mask, vec![1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn long_input_is_truncated() {
        let text = "hello ".repeat(1000);
        let encoded = tokenizer(8).encode(&text).unwrap();
        assert_eq!(encoded.len(), 8);
        assert_eq!(encoded.attended(), 8);
    }

    #[test]
    fn unknown_words_map_to_unk() {
        let encoded = tokenizer(4).encode("bonjour").unwrap();
        assert_eq!(encoded.input_ids[0], 0);
    }

    #[test]
    fn zero_max_length_is_rejected() {
        let inner = Tokenizer::from_str(TOKENIZER_JSON).unwrap();
        assert!(HfTokenizer::from_tokenizer(inner, 0).is_err());
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let result = HfTokenizer::from_file(Path::new("/nonexistent/tokenizer.json"), 512);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
