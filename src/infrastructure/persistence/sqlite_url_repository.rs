//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Migrations for the `urls` table, embedded at compile time.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

const SELECT_COLUMNS: &str = "id, short_code, original_url, created_at, hits";

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: NaiveDateTime,
    hits: i64,
}

impl From<UrlRow> for UrlMapping {
    fn from(row: UrlRow) -> Self {
        UrlMapping::new(
            row.id,
            row.short_code,
            row.original_url,
            row.created_at.and_utc(),
            row.hits,
        )
    }
}

/// Opens a connection pool for `database_url`, creating the file if needed.
///
/// File databases use WAL journaling so redirects can read while a shorten
/// request writes.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    if !database_url.contains(":memory:") {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// SQLite repository for URL mappings.
///
/// Inserts rely on the `UNIQUE` constraint on `short_code`; hit counting runs
/// inside a transaction.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row: UrlRow = sqlx::query_as(&format!(
            "INSERT INTO urls (short_code, original_url) VALUES (?, ?) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&new_mapping.short_code)
        .bind(&new_mapping.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM urls WHERE short_code = ?"
        ))
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM urls WHERE original_url = ? ORDER BY id LIMIT 1"
        ))
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn record_hit(&self, code: &str) -> Result<Option<UrlMapping>, AppError> {
        let mut tx = self.pool.begin().await?;

        // UPDATE first so the transaction takes the write lock up front.
        let row: Option<UrlRow> = sqlx::query_as(&format!(
            "UPDATE urls SET hits = hits + 1 WHERE short_code = ? RETURNING {SELECT_COLUMNS}"
        ))
        .bind(code)
        .fetch_optional(&mut *tx)
        .await?;

        match row {
            Some(row) => {
                tx.commit().await?;
                Ok(Some(row.into()))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_top(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError> {
        let rows: Vec<UrlRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM urls ORDER BY hits DESC, id ASC LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }
}
