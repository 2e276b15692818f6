//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `newsverdict_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `stage`: pipeline stage: "translate", "classify", "fact_check"
//! - `status`: outcome: "ok" or "error"

/// Total submissions processed by the pipeline.
///
/// Labels: `status` ("ok" | "error").
pub const SUBMISSIONS_TOTAL: &str = "newsverdict_submissions_total";

/// Duration of a single pipeline stage in seconds.
///
/// Labels: `stage`.
pub const STAGE_DURATION_SECONDS: &str = "newsverdict_stage_duration_seconds";

/// Total translation calls that fell back to the untranslated text.
pub const TRANSLATION_FAILURES_TOTAL: &str = "newsverdict_translation_failures_total";

/// Total fact-check lookups that produced an error result.
pub const FACT_CHECK_ERRORS_TOTAL: &str = "newsverdict_fact_check_errors_total";
