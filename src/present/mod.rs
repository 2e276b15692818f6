//! Report rendering.
//!
//! The same [`Report`](crate::types::Report) is rendered as an HTML page for
//! the web form and as plain text for the CLI.

mod html;
mod text;

pub use html::{render_error_page, render_form_page, render_html};
pub use text::render_text;

use crate::types::Verdict;

/// Heading of the fact-check section.
pub const FACT_CHECK_HEADING: &str = "Fact-Checking Results:";

/// Shown when the lookup succeeded but returned no claims.
pub const NO_CLAIMS_MESSAGE: &str = "No fact-checking information found for this query.";

/// Verdict sentence without markup, e.g. "This news is predicted to be real".
pub fn verdict_sentence(verdict: Verdict) -> String {
    format!("This news is predicted to be {}", verdict.as_str())
}
