//! # error
//!
//! Centralised dashboard error type.
//!
//! Core operations return `Result<_, DashboardError>` and leave every registry
//! untouched on failure. Axum's `IntoResponse` impl converts the error into a
//! structured JSON body so the view always gets a readable rejection reason.
//!
//! A symbol missing from the asset registry is *not* an error here: holdings
//! and alerts that reference one are skipped silently.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// User input was malformed or out of range.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Positional mutation past the end of a list.
    #[error("Index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A lookup the caller asked for explicitly (e.g. research) found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catch-all for unexpected failures.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DashboardError {
    /// The reason shown to the user, without the variant prefix.
    pub fn reason(&self) -> String {
        match self {
            DashboardError::Validation(msg) | DashboardError::NotFound(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::Validation(_)          => StatusCode::BAD_REQUEST,
            DashboardError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
            DashboardError::NotFound(_)            => StatusCode::NOT_FOUND,
            DashboardError::Internal(_)            => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "ok":    false,
            "error": self.reason(),
        }));

        (status, body).into_response()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
