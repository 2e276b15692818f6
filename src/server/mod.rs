//! Web form server.
//!
//! Routes:
//! - `GET /`: the empty form
//! - `POST /predict`: form post, answers with the rendered report page
//! - `POST /api/predict`: JSON submission, answers with the JSON report
//! - `GET /health`: liveness probe

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::pipeline::Pipeline;
use crate::present::{render_error_page, render_form_page, render_html};
use crate::types::{Language, Submission};
use crate::{Error, Result};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

/// Fields posted by the HTML form.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    Language::English.as_str().to_string()
}

impl PredictForm {
    pub fn into_submission(self) -> Result<Submission> {
        let language = self.language.parse()?;
        Ok(Submission::new(self.title, self.text, language))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the application router.
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/", get(serve_form))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_json))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pipeline })
}

async fn serve_form() -> Html<String> {
    Html(render_form_page())
}

async fn health() -> &'static str {
    "ok"
}

async fn predict_form(State(state): State<AppState>, Form(form): Form<PredictForm>) -> Response {
    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err(e) => {
            return (status_for(&e), Html(render_error_page(&e.to_string()))).into_response();
        }
    };

    match state.pipeline.run(submission).await {
        Ok(report) => Html(render_html(&report)).into_response(),
        Err(e) => {
            error!(error = %e, "submission failed");
            (
                status_for(&e),
                Html(render_error_page(&format!(
                    "Prediction failed: {e}. Please try again."
                ))),
            )
                .into_response()
        }
    }
}

async fn predict_json(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Submission>, JsonRejection>,
) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return json_error(&Error::InvalidInput(rejection.body_text())),
    };

    match state.pipeline.run(submission).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!(error = %e, "submission failed");
            json_error(&e)
        }
    }
}

fn json_error(err: &Error) -> Response {
    (
        status_for(err),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

fn status_for(err: &Error) -> StatusCode {
    if err.is_user_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_maps_to_submission() {
        let form = PredictForm {
            title: "Titel".into(),
            text: "Inhalt".into(),
            language: "Other".into(),
        };
        let submission = form.into_submission().unwrap();
        assert_eq!(submission.title, "Titel");
        assert_eq!(submission.body, "Inhalt");
        assert_eq!(submission.language, Language::Other);
    }

    #[test]
    fn form_with_unknown_language_is_rejected() {
        let form = PredictForm {
            title: String::new(),
            text: String::new(),
            language: "Elvish".into(),
        };
        let err = form.into_submission().unwrap_err();
        assert_eq!(status_for(&err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn inference_errors_are_server_errors() {
        let err = Error::Inference("boom".into());
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
