//! HTTP API module
//!
//! This module contains the static widget assets, the session command
//! endpoints and their response structures.

pub mod assets;
pub mod extract;
pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{any, delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use assets::{index_handler, not_found_handler, style_handler};
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Static assets answer every method
        .route("/", any(index_handler))
        .route("/index.html", any(index_handler))
        .route("/style.css", any(style_handler))
        .route("/health", get(health_handler))
        // Widget session endpoints
        .route("/api/status", get(status_handler))
        .route("/api/display", get(display_handler))
        .route("/api/timer/start", post(start_handler))
        .route("/api/timer/pause", post(pause_handler))
        .route("/api/timer/reset", post(reset_handler))
        .route("/api/tasks", post(add_task_handler))
        .route("/api/tasks/:id", delete(delete_task_handler))
        .route("/api/tasks/:id/select", post(select_task_handler))
        .fallback(not_found_handler)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
