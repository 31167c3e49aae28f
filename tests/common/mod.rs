#![allow(dead_code)]

use hashlink::application::services::UrlService;
use hashlink::infrastructure::persistence::{InMemoryUrlRepository, MIGRATOR, SqliteUrlRepository};
use hashlink::state::AppState;
use hashlink::utils::code_generator::CodePolicy;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

pub const BASE_URL: &str = "http://short.test";

/// Opens a fresh migrated in-memory database.
///
/// Every connection to `:memory:` is a separate database, so the pool is held
/// to a single connection that is never recycled.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url) VALUES (?, ?)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_hits(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT hits FROM urls WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let url_service = Arc::new(UrlService::new(repository, CodePolicy::Content, 5));
    AppState::new(url_service, BASE_URL)
}

pub fn create_memory_state() -> AppState {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(repository, CodePolicy::Content, 5));
    AppState::new(url_service, BASE_URL)
}
