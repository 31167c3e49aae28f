//! Repository trait for URL mapping storage.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short code mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite table
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Lock-guarded map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping with zero hits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by short code without touching its hit counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds the mapping for an already shortened URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Looks up a short code and increments its hit counter in one atomic step.
    ///
    /// The returned mapping already includes the new hit.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if the code exists
    /// - `Ok(None)` if it does not; a miss is not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record_hit(&self, code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists the most visited mappings, highest hit count first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_top(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError>;
}
