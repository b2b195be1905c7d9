//! HTTP routes for the classification service.

mod api;

use crate::AppState;
use axum::{routing::post, Router};
use tower_http::cors::CorsLayer;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(api::classify))
        .route("/feedback", post(api::feedback))
        .route("/retrain", post(api::retrain))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
