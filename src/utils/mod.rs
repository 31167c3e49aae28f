//! Helpers shared by the service layer.
//!
//! - [`code_generator`] - Short code derivation from a URL
//! - [`url_validator`] - Validation and canonicalization of submitted URLs

pub mod code_generator;
pub mod url_validator;
