//! Repository implementations.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - SQLite-backed storage, the default
//! - [`InMemoryUrlRepository`] - Process-local map, selected with `STORAGE_BACKEND=memory`

pub mod memory_url_repository;
pub mod sqlite_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use sqlite_url_repository::{MIGRATOR, SqliteUrlRepository, connect};
