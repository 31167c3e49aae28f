//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Shortening, resolution and hit statistics

pub mod services;
