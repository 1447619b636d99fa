//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No example page matches the path. Carries the rendered not-found page.
    #[error("Page not found: {path}")]
    PageNotFound { path: String, html: String },

    /// Navigation was requested for a path no example page matches.
    #[error("Navigation not found: {0}")]
    NavigationNotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::PageNotFound { html, .. } => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Self::NavigationNotFound(path) => (
                StatusCode::NOT_FOUND,
                axum::Json(json!({"error": "Page not found", "path": path})),
            )
                .into_response(),
        }
    }
}
