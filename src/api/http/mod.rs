// src/api/http/mod.rs
// HTTP router composition for the classification gateway.

mod classify;
mod history;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use classify::{check_sms_handler, check_url_handler};
use history::{delete_sms_handler, delete_url_handler, stored_sms_handler, stored_urls_handler};

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Main HTTP router: one classification pipeline per kind, plus history
/// read/delete access and a health probe.
pub fn http_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        // URL pipeline
        .route("/check-url", post(check_url_handler))
        .route("/stored-urls", get(stored_urls_handler))
        .route("/delete-url/{id}", delete(delete_url_handler))
        // SMS pipeline
        .route("/check-sms", post(check_sms_handler))
        .route("/stored-sms", get(stored_sms_handler))
        .route("/delete-sms/{id}", delete(delete_sms_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
