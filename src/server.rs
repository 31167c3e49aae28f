//! HTTP server initialization and runtime setup.
//!
//! Opens the configured store, wires the service layer and runs the Axum
//! server until Ctrl+C.

use crate::application::services::UrlService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{
    InMemoryUrlRepository, MIGRATOR, SqliteUrlRepository, connect,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool and migrations (or the in-memory store)
/// - URL service with the configured code policy
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, pool) = open_storage(&config).await?;

    let url_service = Arc::new(UrlService::new(
        repository,
        config.code_policy,
        config.code_max_attempts,
    ));
    let state = AppState::new(url_service, config.base_url.clone());

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    Ok(())
}

/// Builds the repository for the configured backend.
///
/// The pool is returned alongside so it can be closed on shutdown.
async fn open_storage(
    config: &Config,
) -> Result<(Arc<dyn UrlRepository>, Option<SqlitePool>)> {
    match config.storage_backend {
        StorageBackend::Sqlite => {
            let pool = connect(&config.database_url, config.db_max_connections)
                .await
                .with_context(|| format!("Failed to open database {}", config.database_url))?;
            tracing::info!("Connected to database");

            MIGRATOR
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let repository = SqliteUrlRepository::new(Arc::new(pool.clone()));
            Ok((Arc::new(repository), Some(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, mappings are lost on restart");
            Ok((Arc::new(InMemoryUrlRepository::new()), None))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
