//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Home page
//! - `POST /shorten`      - Shorten form submission
//! - `GET  /stats?code=`  - Hit count as plain text
//! - `GET  /health`       - Storage health check
//! - `GET  /{code}`       - Short URL redirect
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the application router with state and tracing applied.
///
/// `static_dir` is served under `/static`.
pub fn router(state: AppState, static_dir: &str) -> Router {
    web::routes::routes()
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/abc/` and `/abc` hit the same route.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
