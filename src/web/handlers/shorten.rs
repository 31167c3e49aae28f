//! Handler for the shorten form.

use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::templates::{HomeTemplate, ResultTemplate};

/// Fields posted by the home page form.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Shortens the URL submitted through the home page form.
///
/// # Endpoint
///
/// `POST /shorten` (other methods get 405 from the router)
///
/// # Form Fields
///
/// - `url` (required): absolute `http` or `https` URL
///
/// # Responses
///
/// - **200 OK** with the result page showing the original and short URL
/// - **400 Bad Request** with the home page and an error message when the
///   form cannot be parsed, `url` is empty, or the URL is invalid
/// - **500 Internal Server Error** with the home page and a generic message
///   when the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "rejected shorten form");
            return (
                StatusCode::BAD_REQUEST,
                HomeTemplate::with_error("Could not parse form"),
            )
                .into_response();
        }
    };

    let long_url = form.url.trim();
    if long_url.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            HomeTemplate::with_error("URL is required"),
        )
            .into_response();
    }

    match state.url_service.shorten(long_url).await {
        Ok(mapping) => ResultTemplate {
            long_url: long_url.to_string(),
            short_url: state
                .url_service
                .short_url(&state.base_url, &mapping.short_code),
        }
        .into_response(),
        Err(AppError::Validation { message }) => (
            StatusCode::BAD_REQUEST,
            HomeTemplate::with_error(format!("Invalid URL: {message}")),
        )
            .into_response(),
        Err(e) => {
            error!(url = %long_url, error = %e, "failed to create short URL");
            (
                e.status_code(),
                HomeTemplate::with_error("Error creating short URL"),
            )
                .into_response()
        }
    }
}
