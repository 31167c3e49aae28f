//! Handler for plain-text hit statistics.

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub code: Option<String>,
}

/// Returns how many times a short code has been resolved.
///
/// # Endpoint
///
/// `GET /stats?code={code}`
///
/// # Response
///
/// ```text
/// Short URL /abcd1234 has been accessed 3 times
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `code` is missing or empty.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<String, AppError> {
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::bad_request("Short code is required"))?;

    let hits = state.url_service.hits(&code).await?;

    Ok(format!("Short URL /{code} has been accessed {hits} times"))
}
