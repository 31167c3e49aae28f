//! URL shortening, resolution and statistics service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodePolicy, generate_code};
use crate::utils::url_validator::validate_url;

/// Default bound on code generation attempts per shorten request.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Service for creating, resolving and inspecting short links.
///
/// Holds the store as a trait object so the backend is chosen at startup.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    policy: CodePolicy,
    max_attempts: u32,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn new(repository: Arc<dyn UrlRepository>, policy: CodePolicy, max_attempts: u32) -> Self {
        Self {
            repository,
            policy,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Validates `long_url` and returns its mapping, creating one if needed.
    ///
    /// # Deduplication
    ///
    /// Under [`CodePolicy::Content`] an existing mapping for the same canonical
    /// URL is returned unchanged. Under [`CodePolicy::Timestamped`] every call
    /// creates a new mapping.
    ///
    /// # Collisions
    ///
    /// A candidate code already held by a different URL is skipped and the next
    /// attempt is generated. A code held by the same URL (a concurrent request
    /// won the race) is returned as is. After `max_attempts` candidates the
    /// request fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is rejected by the validator.
    /// Returns [`AppError::Internal`] on storage errors or when no free code
    /// was found.
    pub async fn shorten(&self, long_url: &str) -> Result<UrlMapping, AppError> {
        let url = validate_url(long_url).map_err(|e| AppError::bad_request(e.to_string()))?;

        if self.policy.deduplicates()
            && let Some(existing) = self.repository.find_by_original_url(&url).await?
        {
            tracing::debug!(code = %existing.short_code, "reusing existing mapping");
            return Ok(existing);
        }

        for attempt in 0..self.max_attempts {
            let code = generate_code(&url, self.policy, attempt);

            if let Some(taken) = self.repository.find_by_code(&code).await? {
                if taken.original_url == url {
                    return Ok(taken);
                }
                tracing::warn!(%code, attempt, "short code collision, retrying");
                continue;
            }

            match self
                .repository
                .insert(NewUrlMapping::new(code.clone(), url.clone()))
                .await
            {
                Ok(mapping) => {
                    tracing::info!(code = %mapping.short_code, url = %mapping.original_url, "created short link");
                    return Ok(mapping);
                }
                Err(AppError::Conflict { .. }) => {
                    if let Some(taken) = self.repository.find_by_code(&code).await?
                        && taken.original_url == url
                    {
                        return Ok(taken);
                    }
                    tracing::warn!(%code, attempt, "short code taken during insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(%url, attempts = self.max_attempts, "no free short code");
        Err(AppError::internal("Could not allocate a unique short code"))
    }

    /// Resolves a short code and counts the hit.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the code exists; its hit counter was incremented
    /// - `Ok(None)` if the code is unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        let mapping = self.repository.record_hit(code).await?;

        if mapping.is_none() {
            tracing::debug!(%code, "short code not found");
        }

        Ok(mapping.map(|m| m.original_url))
    }

    /// Returns how many times `code` has been resolved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn hits(&self, code: &str) -> Result<i64, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .map(|m| m.hits)
            .ok_or_else(|| AppError::not_found("Short URL not found"))
    }

    /// Counts stored mappings. Used as the storage health probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Lists the most visited mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn top(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list_top(limit).await
    }

    /// Builds the shareable short URL from the configured base and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
