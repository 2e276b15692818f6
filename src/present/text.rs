use std::fmt::Write;

use super::{FACT_CHECK_HEADING, NO_CLAIMS_MESSAGE, verdict_sentence};
use crate::types::{FactCheckResult, Report};

/// Render a report as plain text.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    for error in report.translation_errors() {
        let _ = writeln!(out, "Warning: {error}");
    }

    let probabilities = report
        .classification
        .probabilities()
        .iter()
        .map(|(label, p)| format!("{label:?}: {p:.4}"))
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(out, "Prediction: {{{probabilities}}}");
    let _ = writeln!(out, "{}", verdict_sentence(report.verdict));
    let _ = writeln!(out);
    let _ = writeln!(out, "{FACT_CHECK_HEADING}");

    match &report.fact_check {
        FactCheckResult::Error { message, .. } => {
            let _ = writeln!(out, "Error: {message}");
        }
        FactCheckResult::Claims(claims) if claims.is_empty() => {
            let _ = writeln!(out, "{NO_CLAIMS_MESSAGE}");
        }
        FactCheckResult::Claims(claims) => {
            for claim in claims {
                let _ = writeln!(out, "Claim: {}", claim.text_or_default());
                for review in &claim.claim_review {
                    let _ = writeln!(out, "- Publisher: {}", review.publisher_name());
                    let _ = writeln!(out, "  Rating: {}", review.rating());
                    let _ = writeln!(out, "  URL: {}", review.link());
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Claim, ClaimReview, Classification, Language, Publisher, TranslationOutcome,
    };

    fn report(fact_check: FactCheckResult) -> Report {
        let classification = Classification::from_probabilities(0.2, 0.8);
        Report {
            title: "T".into(),
            body: "B".into(),
            language: Language::English,
            translations: vec![],
            classification,
            verdict: classification.verdict(),
            query: "T".into(),
            fact_check,
        }
    }

    #[test]
    fn renders_probabilities_and_verdict() {
        let text = render_text(&report(FactCheckResult::Claims(vec![])));
        assert!(text.contains("Prediction: {\"Fake\": 0.2000, \"Real\": 0.8000}"));
        assert!(text.contains("This news is predicted to be real"));
        assert!(text.contains(NO_CLAIMS_MESSAGE));
    }

    #[test]
    fn renders_error_without_claims() {
        let text = render_text(&report(FactCheckResult::error(
            Some(404),
            "HTTP 404: not found",
        )));
        assert!(text.contains("Error: HTTP 404: not found"));
        assert!(!text.contains("Claim:"));
        assert!(!text.contains(NO_CLAIMS_MESSAGE));
    }

    #[test]
    fn renders_claims_with_placeholders() {
        let claims = vec![
            Claim {
                text: Some("Water is wet".into()),
                claim_review: vec![ClaimReview {
                    publisher: Some(Publisher {
                        name: Some("Snopes".into()),
                        site: None,
                    }),
                    textual_rating: Some("True".into()),
                    url: Some("https://snopes.example/wet".into()),
                    ..Default::default()
                }],
                ..Default::default()
            },
            Claim {
                claim_review: vec![ClaimReview::default()],
                ..Default::default()
            },
        ];
        let text = render_text(&report(FactCheckResult::Claims(claims)));
        assert!(text.contains("Claim: Water is wet"));
        assert!(text.contains("- Publisher: Snopes"));
        assert!(text.contains("  Rating: True"));
        assert!(text.contains("  URL: https://snopes.example/wet"));
        assert!(text.contains("Claim: N/A"));
        assert!(text.contains("- Publisher: N/A"));
        assert!(text.contains("  URL: #"));
    }

    #[test]
    fn renders_translation_warnings() {
        let mut r = report(FactCheckResult::Claims(vec![]));
        r.translations = vec![
            TranslationOutcome::translated("Hello"),
            TranslationOutcome::failed("timeout"),
        ];
        let text = render_text(&r);
        assert!(text.starts_with("Warning: Error in translation: timeout\n"));
    }
}
