//! REST endpoints: classify, feedback, retrain.
//!
//! Validation errors surface as 400 with a descriptive body. Retrain is
//! fire-and-forget: the caller gets an acknowledgment and the outcome is
//! observable only through later classifications or the logs.

use crate::state::{AppState, RetrainStatus};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

/// Classify request body.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub text: String,
}

/// Classify response body.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: String,
}

/// Classify a transaction description.
pub async fn classify(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return bad_request("missing text");
    }

    match state.classify(&req.text) {
        Ok(category) => (StatusCode::OK, Json(ClassifyResponse { category })).into_response(),
        Err(e) => {
            error!("classification failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "classification failed" })),
            )
                .into_response()
        }
    }
}

/// Feedback request body.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub label: String,
}

/// Record a category correction.
pub async fn feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() || req.label.trim().is_empty() {
        return bad_request("missing text or label");
    }

    match state.record_feedback(&req.text, &req.label) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "feedback received" })),
        )
            .into_response(),
        Err(e) => {
            error!("feedback append failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "could not record feedback" })),
            )
                .into_response()
        }
    }
}

/// Kick off a background retrain. No body required.
pub async fn retrain(State(state): State<AppState>) -> impl IntoResponse {
    match state.trigger_retrain() {
        RetrainStatus::Started => (
            StatusCode::ACCEPTED,
            Json(json!({ "status": "training_started" })),
        )
            .into_response(),
        RetrainStatus::Busy => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "training already in progress" })),
        )
            .into_response(),
    }
}

fn bad_request(message: &str) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
