use std::fmt::Write;

use super::{FACT_CHECK_HEADING, NO_CLAIMS_MESSAGE};
use crate::types::{FactCheckResult, Report, Verdict};

const PAGE_TITLE: &str = "News Prediction";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:.8rem;font-weight:bold}\
input[type=text],textarea,select{width:100%;box-sizing:border-box;padding:.4rem}\
textarea{min-height:10rem}\
button{margin-top:1rem;padding:.5rem 1.2rem}\
.error{background:#fdecea;color:#611a15;padding:.6rem;border-radius:4px}\
.warning{background:#fff4e5;color:#663c00;padding:.6rem;border-radius:4px}\
table{border-collapse:collapse}td{padding:.2rem .8rem .2rem 0}\
.claim{margin-top:1rem}";

/// The empty form.
pub fn render_form_page() -> String {
    page(&form_section())
}

/// Form followed by the results of one submission.
pub fn render_html(report: &Report) -> String {
    let mut body = form_section();

    for error in report.translation_errors() {
        let _ = writeln!(body, "<p class=\"warning\">{}</p>", escape(&error));
    }

    body.push_str("<h2>Prediction:</h2>\n<table>\n");
    for (label, probability) in report.classification.probabilities() {
        let _ = writeln!(
            body,
            "<tr><td>{label}</td><td>{probability:.4}</td></tr>"
        );
    }
    body.push_str("</table>\n");

    let emoji = match report.verdict {
        Verdict::Real => "&#x1F4AA;",
        Verdict::Fake => "&#x1F4A9;",
    };
    let _ = writeln!(
        body,
        "<p>This news is predicted to be <strong>{}</strong> {emoji}</p>",
        report.verdict.as_str()
    );

    let _ = writeln!(body, "<h2>{FACT_CHECK_HEADING}</h2>");
    match &report.fact_check {
        FactCheckResult::Error { message, .. } => {
            let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(message));
        }
        FactCheckResult::Claims(claims) if claims.is_empty() => {
            let _ = writeln!(body, "<p>{NO_CLAIMS_MESSAGE}</p>");
        }
        FactCheckResult::Claims(claims) => {
            for claim in claims {
                let _ = writeln!(
                    body,
                    "<div class=\"claim\"><p><strong>Claim:</strong> {}</p>",
                    escape(claim.text_or_default())
                );
                if !claim.claim_review.is_empty() {
                    body.push_str("<ul>\n");
                    for review in &claim.claim_review {
                        let _ = writeln!(
                            body,
                            "<li><strong>Publisher:</strong> {}<br>\
                             <strong>Rating:</strong> {}<br>\
                             <strong>URL:</strong> <a href=\"{}\" rel=\"noopener noreferrer\">More Info</a></li>",
                            escape(review.publisher_name()),
                            escape(review.rating()),
                            escape(safe_link(review.link())),
                        );
                    }
                    body.push_str("</ul>\n");
                }
                body.push_str("</div>\n");
            }
        }
    }

    page(&body)
}

/// Form followed by a failure message for a submission that could not be processed.
pub fn render_error_page(message: &str) -> String {
    let mut body = form_section();
    let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(message));
    page(&body)
}

fn form_section() -> String {
    String::from(
        "<h1>Fake News Prediction</h1>\n\
         <form method=\"post\" action=\"/predict\">\n\
         <h3>Enter News Details</h3>\n\
         <label for=\"title\">Title</label>\n\
         <input type=\"text\" id=\"title\" name=\"title\">\n\
         <label for=\"text\">Text</label>\n\
         <textarea id=\"text\" name=\"text\"></textarea>\n\
         <label for=\"language\">Select Language</label>\n\
         <select id=\"language\" name=\"language\">\
         <option value=\"English\">English</option>\
         <option value=\"Other\">Other</option></select>\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n",
    )
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Only http(s) links are emitted as hrefs.
fn safe_link(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url
    } else {
        "#"
    }
}

/// Escape text for HTML element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
