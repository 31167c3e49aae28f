//! Home page and short code redirect handlers.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::state::AppState;
use crate::web::templates::HomeTemplate;

/// Single-segment paths that are never treated as short codes.
const RESERVED_PATHS: &[&str] = &["favicon.ico", "robots.txt"];

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate::default()
}

/// Redirects a short code to its original URL and counts the hit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the original URL
/// - **404 Not Found** with the home page and a "Short URL not found" message
/// - **404 Not Found** with an empty body for reserved paths such as `favicon.ico`
/// - **500 Internal Server Error** with the home page and a generic message
///   when the store fails
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    if RESERVED_PATHS.contains(&code.as_str()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match state.url_service.resolve(&code).await {
        Ok(Some(long_url)) => (StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            HomeTemplate::with_error("Short URL not found"),
        )
            .into_response(),
        Err(e) => {
            error!(%code, error = %e, "failed to resolve short code");
            (
                e.status_code(),
                HomeTemplate::with_error("Could not look up short URL"),
            )
                .into_response()
        }
    }
}
