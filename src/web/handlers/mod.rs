//! HTTP request handlers.

mod health;
mod home;
mod shorten;
mod stats;

pub use health::{CheckStatus, HealthChecks, HealthResponse, health_handler};
pub use home::{home_handler, redirect_handler};
pub use shorten::{ShortenForm, shorten_handler};
pub use stats::{StatsQuery, stats_handler};
