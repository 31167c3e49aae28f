//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Stored mapping. The hit counter is atomic so lookups can bump it while
/// holding only the read lock.
#[derive(Debug)]
struct Entry {
    id: i64,
    original_url: String,
    created_at: DateTime<Utc>,
    hits: AtomicI64,
}

impl Entry {
    fn to_mapping(&self, code: &str) -> UrlMapping {
        UrlMapping::new(
            self.id,
            code.to_owned(),
            self.original_url.clone(),
            self.created_at,
            self.hits.load(Ordering::SeqCst),
        )
    }
}

#[derive(Debug, Default)]
struct Inner {
    by_code: HashMap<String, Entry>,
    /// original URL -> first short code created for it
    by_url: HashMap<String, String>,
    next_id: i64,
}

/// Process-local repository guarded by a single reader/writer lock.
///
/// Reads (including hit counting) run concurrently; inserts are exclusive.
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut inner = self.inner.write().await;

        if inner.by_code.contains_key(&new_mapping.short_code) {
            return Err(AppError::conflict("Short code already exists"));
        }

        inner.next_id += 1;
        let entry = Entry {
            id: inner.next_id,
            original_url: new_mapping.original_url.clone(),
            created_at: Utc::now(),
            hits: AtomicI64::new(0),
        };
        let mapping = entry.to_mapping(&new_mapping.short_code);

        inner
            .by_url
            .entry(new_mapping.original_url)
            .or_insert_with(|| new_mapping.short_code.clone());
        inner.by_code.insert(new_mapping.short_code, entry);

        Ok(mapping)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.by_code.get(code).map(|e| e.to_mapping(code)))
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError> {
        let inner = self.inner.read().await;

        let mapping = inner
            .by_url
            .get(url)
            .and_then(|code| inner.by_code.get(code).map(|e| e.to_mapping(code)));

        Ok(mapping)
    }

    async fn record_hit(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        let inner = self.inner.read().await;

        let Some(entry) = inner.by_code.get(code) else {
            return Ok(None);
        };

        let hits = entry.hits.fetch_add(1, Ordering::SeqCst) + 1;
        let mut mapping = entry.to_mapping(code);
        mapping.hits = hits;

        Ok(Some(mapping))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.by_code.len() as i64)
    }

    async fn list_top(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let inner = self.inner.read().await;

        let mut mappings: Vec<UrlMapping> = inner
            .by_code
            .iter()
            .map(|(code, entry)| entry.to_mapping(code))
            .collect();
        mappings.sort_by(|a, b| b.hits.cmp(&a.hits).then(a.id.cmp(&b.id)));
        mappings.truncate(limit.max(0) as usize);

        Ok(mappings)
    }
}
