//! Route table for the web layer.

use crate::state::AppState;
use crate::web::handlers::{
    health_handler, home_handler, redirect_handler, shorten_handler, stats_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `GET /` - Home page with the shorten form
/// - `POST /shorten` - Create a short URL from the form
/// - `GET /stats?code=` - Plain-text hit count
/// - `GET /health` - JSON health check
/// - `GET /{code}` - Redirect to the original URL
///
/// Fixed paths win over `/{code}`, so `shorten`, `stats` and `health` can never
/// be resolved as short codes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
