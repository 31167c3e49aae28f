//! Askama page templates.

use askama::Template;
use askama_web::WebTemplate;

/// Home page with the shorten form.
///
/// Renders `templates/home.html`; `error` is shown above the form when set.
#[derive(Template, WebTemplate, Default)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub error: Option<String>,
}

impl HomeTemplate {
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }
}

/// Result page shown after a successful shorten request.
///
/// Renders `templates/result.html`.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub long_url: String,
    pub short_url: String,
}
