//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted association between a short code and its original URL.
///
/// Everything except `hits` is immutable once the mapping is created. `hits`
/// only ever grows, one step per successful resolution of `short_code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub hits: i64,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        hits: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            hits,
        }
    }
}

/// Input data for creating a new mapping.
///
/// The id, creation time and hit counter are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_code: String,
    pub original_url: String,
}

impl NewUrlMapping {
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
        }
    }
}
