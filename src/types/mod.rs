//! Public types for the newsverdict pipeline.

mod classification;
mod factcheck;
mod report;
mod submission;
mod translation;

pub use classification::{Classification, LABELS, Verdict};
pub use factcheck::{Claim, ClaimReview, FactCheckResult, Publisher};
pub use report::Report;
pub use submission::{Language, Submission};
pub use translation::{TRANSLATION_ERROR_PREFIX, TranslationOutcome};
