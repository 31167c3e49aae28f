//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored short code to long URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
