//! Classifier input framing and encoding.
//!
//! The fake-news model was trained on sequences of the form
//! `<title>{title}<content>{body}<end>`; the markers must match byte-for-byte.

#[cfg(feature = "local-inference")]
mod hf;

#[cfg(feature = "local-inference")]
pub use hf::HfTokenizer;

use crate::error::Result;

pub const TITLE_MARKER: &str = "<title>";
pub const CONTENT_MARKER: &str = "<content>";
pub const END_MARKER: &str = "<end>";

/// Fixed sequence length the classifier is fed (pad or truncate to this).
pub const MAX_LENGTH: usize = 512;

/// Build the sentinel-framed model input for a title/body pair.
pub fn frame_input(title: &str, body: &str) -> String {
    let mut framed = String::with_capacity(
        TITLE_MARKER.len() + title.len() + CONTENT_MARKER.len() + body.len() + END_MARKER.len(),
    );
    framed.push_str(TITLE_MARKER);
    framed.push_str(title);
    framed.push_str(CONTENT_MARKER);
    framed.push_str(body);
    framed.push_str(END_MARKER);
    framed
}

/// Token IDs and attention mask ready for the ONNX session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedInput {
    pub input_ids: Vec<i64>,
    pub attention_mask: Vec<i64>,
}

impl EncodedInput {
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }

    /// Number of non-padding tokens.
    pub fn attended(&self) -> usize {
        self.attention_mask.iter().filter(|&&m| m != 0).count()
    }
}

/// Turns framed text into fixed-length model input.
pub trait InputEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<EncodedInput>;
}
