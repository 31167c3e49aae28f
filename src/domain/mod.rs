//! Domain layer: entities and the storage contract.
//!
//! - [`entities`] - Plain data structures
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or database code.

pub mod entities;
pub mod repositories;
