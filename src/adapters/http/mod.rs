//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the garment endpoints with the cross-cutting
//! layers: request tracing, CORS and panic recovery.

pub mod garment;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Json, Router,
};
use http::{HeaderValue, StatusCode};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as CorsAny, CorsLayer},
    trace::TraceLayer,
};

pub use garment::{garment_routes, ApiError, ErrorResponse, GarmentHandlers};

/// Builds the application router.
pub fn build_router(handlers: GarmentHandlers, cors: CorsLayer) -> Router {
    garment_routes(handlers).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

/// CORS for the given origins; any origin when the list is empty.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(CorsAny)
        .allow_headers(CorsAny);

    if origins.is_empty() {
        return layer.allow_origin(CorsAny);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unexpected error".to_string()
    };

    tracing::error!(error = %message, "Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}
