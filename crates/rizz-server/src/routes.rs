use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::{delete, get, post};
use rizz_core::AppState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Prefix the chat backend mounts the translation API under
pub const API_PREFIX: &str = "/api/translation";

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(API_PREFIX, translation_routes())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %uuid::Uuid::new_v4(),
            )
        }))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn translation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/languages", get(handlers::languages))
        .route("/detect", post(handlers::detect_language))
        .route("/translate", post(handlers::translate))
        .route("/batch", post(handlers::translate_batch))
        .route("/message", post(handlers::translate_message))
        .route("/stats", get(handlers::cache_stats))
        .route("/cache", delete(handlers::clear_cache))
        .route("/health", get(handlers::health))
}
