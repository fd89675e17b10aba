//! HTTP API server for pulse.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod session;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use pulse_storage::EngagementStore;

pub use session::SessionId;

/// Shared application state for all HTTP handlers.
///
/// The store is an explicit dependency so tests can swap in a double.
pub struct AppState {
    pub store: Arc<dyn EngagementStore>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/content", get(handlers::content::list_content))
        .route("/like/{slug}", post(handlers::likes::record_like))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// A known path hit with an unsupported method. No storage access happens.
async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({"message": "Method Not Allowed"})),
    )
}
