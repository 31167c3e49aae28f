//! # hashlink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL mapping entity and the repository trait
//! - **Application Layer** ([`application`]) - Shortening, resolution and stats
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory stores
//! - **Web Layer** ([`web`]) - HTML pages, plain-text stats and health check
//!
//! ## Short codes
//!
//! A code is the first eight characters of the URL-safe base64 encoding of the
//! SHA-256 digest of the long URL. See [`utils::code_generator`].
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodePolicy;
}
