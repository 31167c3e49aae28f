//! Browser-facing HTTP layer.
//!
//! Server-rendered pages use Askama templates; the stats endpoint answers in
//! plain text and the health check in JSON.
//!
//! # Modules
//!
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table
//! - [`templates`] - Askama page templates

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod templates;
