use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::DiffError;
use tracing::warn;

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({"error": message}))).into_response()
}

/// Unreadable or oversized request bodies, in the same shape as [`DiffError`].
pub(super) fn rejected(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    warn!(%status, "rejected diff request body: {}", rejection.body_text());
    error_body(status, rejection.body_text())
}

impl IntoResponse for DiffError {
    fn into_response(self) -> Response {
        let status = match self {
            DiffError::InputTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };
        error_body(status, self.to_string())
    }
}
