//! HTTP routes for garment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze_compatibility, generate_dialogue, health, score_pair, GarmentHandlers};

/// Creates the garment router with all endpoints.
pub fn garment_routes(handlers: GarmentHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dialogue/generate", post(generate_dialogue))
        .route("/compatibility/analyze", post(analyze_compatibility))
        .route("/compatibility/score", post(score_pair))
        .with_state(handlers)
}
