//! Static widget assets

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Widget markup, including the client-side timer
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub const STYLE_CSS: &str = include_str!("../../assets/style.css");

/// Handle GET / and GET /index.html
pub async fn index_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], INDEX_HTML)
}

/// Handle GET /style.css
pub async fn style_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

/// Fallback for every unknown path
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Not found",
    )
}
