use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use super::http_error::rejected;
use super::state::AppState;
use crate::config::DiffLimits;
use crate::error::Result;
use crate::lcs::{diff_tokens, summarize};
use crate::render::{render, OutputFormat, RenderOptions};
use crate::tokenize::{SplitMode, TokenSequence};

/// Create the router with the health probe and the diff endpoints.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.limits.max_body_bytes;
    Router::new()
        .route("/healthz", get(health))
        .route("/api/text-diff", post(text_diff))
        .route("/api/text-difference", post(text_diff))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    pub text1: String,
    pub text2: String,
    #[serde(default)]
    pub mode: SplitMode,
    #[serde(default)]
    pub show_line_numbers: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResponse {
    pub diff: String,
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

/// Tokenizes, checks the table budget, diffs and renders one request.
pub fn run_diff(request: &DiffRequest, limits: &DiffLimits) -> Result<DiffResponse> {
    let left = TokenSequence::new(&request.text1, request.mode);
    let right = TokenSequence::new(&request.text2, request.mode);
    limits.check(&left, &right)?;

    let script = diff_tokens(&left, &right);
    let summary = summarize(&script);
    let options = RenderOptions::new(request.format).with_line_numbers(request.show_line_numbers);
    debug!(
        left_tokens = left.len(),
        right_tokens = right.len(),
        added = summary.added,
        removed = summary.removed,
        "computed diff"
    );

    Ok(DiffResponse {
        diff: render(&script, &options),
        added: summary.added,
        removed: summary.removed,
        unchanged: summary.unchanged,
    })
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "textdiff"
    }))
}

async fn text_diff(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<DiffRequest>, JsonRejection>,
) -> std::result::Result<Json<DiffResponse>, Response> {
    let Json(request) = payload.map_err(rejected)?;
    run_diff(&request, &state.limits)
        .map(Json)
        .map_err(|err| {
            warn!(mode = ?request.mode, format = ?request.format, "rejected diff request: {err}");
            err.into_response()
        })
}
