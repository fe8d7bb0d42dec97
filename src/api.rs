//! HTTP handlers for the analysis dashboard.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::AnalysisError;
use crate::pipeline::{AnalysisOutcome, Pipeline};
use crate::report::AnalysisReport;

pub struct AppState {
    pub pipeline: Pipeline,
    pub api_key_configured: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Full video URL, e.g. `https://www.youtube.com/watch?v=dQw4w9WgXcQ`
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub url: String,
}

/// Successful run payload. `report` is present only when `status` is `ok`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponseDoc {
    /// `ok`, `no_comments` or `insufficient_data`
    pub status: String,
    pub message: Option<String>,
    pub report: Option<AnalysisReport>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    /// `input`, `auth`, `fetch` or `insufficient_data`
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: &AnalysisError) -> ApiError {
    let status = match err {
        AnalysisError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        AnalysisError::Auth(_) => StatusCode::UNAUTHORIZED,
        AnalysisError::Fetch(_) => StatusCode::BAD_GATEWAY,
        AnalysisError::InsufficientData(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (
        status,
        Json(ErrorResponse {
            status: "error".to_string(),
            kind: err.kind().to_string(),
            message: format!("An error occurred: {}", err),
        }),
    )
}

/// A body that is not a valid `AnalyzeRequest` is an input error like a bad URL.
fn rejection_response(rejection: JsonRejection) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            status: "error".to_string(),
            kind: "input".to_string(),
            message: format!("An error occurred: Invalid request body: {}", rejection.body_text()),
        }),
    )
}

/// Analyze the comments of one video
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Run finished (report, no comments, or insufficient data)", body = AnalyzeResponseDoc),
        (status = 400, description = "Malformed body or URL has no video id", body = ErrorResponse),
        (status = 401, description = "API key missing or rejected", body = ErrorResponse),
        (status = 502, description = "Comment retrieval failed", body = ErrorResponse)
    ),
    tag = "analysis"
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisOutcome>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("❌ Rejected analyze request: {}", rejection.body_text());
        rejection_response(rejection)
    })?;
    match state.pipeline.run(&req.url).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            tracing::warn!("❌ Analysis failed for '{}': {}", req.url, e);
            Err(error_response(&e))
        }
    }
}

/// Liveness and configuration check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "analysis"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        api_key_configured: state.api_key_configured,
    })
}
