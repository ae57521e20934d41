//! HTTP-edge error type

use super::message::ValidationIssue;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const INVALID_REQUEST: &str = "Invalid request format";
pub const INTERNAL_FAILURE: &str = "Failed to process chat request";
/// Shown by the chat UI when the server itself failed.
pub const INTERNAL_FAILURE_TEXT: &str = "I encountered an error. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid request: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(details) => json!({
                "error": INVALID_REQUEST,
                "details": details,
            }),
            Self::NotFound(what) => json!({ "error": format!("{} not found", what) }),
        };
        (status, Json(body)).into_response()
    }
}

/// Body of the 500 produced when a handler panics.
pub fn internal_failure_body() -> serde_json::Value {
    json!({
        "error": INTERNAL_FAILURE,
        "text": INTERNAL_FAILURE_TEXT,
    })
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(vec![ValidationIssue::new(Vec::new(), rejection.body_text())])
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(vec![ValidationIssue::new(Vec::new(), rejection.body_text())])
    }
}
