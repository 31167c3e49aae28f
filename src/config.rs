//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://urls.db`)
//! - `STORAGE_BACKEND` - `sqlite` or `memory` (default: `sqlite`)
//! - `BASE_URL` - Prefix of the short URLs shown to users (default: `http://localhost:8080`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_POLICY` - `content` or `timestamped` (default: `content`)
//! - `CODE_MAX_ATTEMPTS` - Short code candidates tried per request (default: 5)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::application::services::url_service::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::CodePolicy;

/// Where URL mappings are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "unknown storage backend '{other}', expected 'sqlite' or 'memory'"
            )),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sqlite => f.write_str("sqlite"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub storage_backend: StorageBackend,
    /// Prefix for displayed short URLs. Not validated.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub code_policy: CodePolicy,
    pub code_max_attempts: u32,
    pub db_max_connections: u32,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an enumerated or numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(v) => v
                .parse::<StorageBackend>()
                .map_err(anyhow::Error::msg)
                .context("Invalid STORAGE_BACKEND")?,
            Err(_) => StorageBackend::default(),
        };

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_policy = match env::var("CODE_POLICY") {
            Ok(v) => v
                .parse::<CodePolicy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid CODE_POLICY")?,
            Err(_) => CodePolicy::default(),
        };

        let code_max_attempts = parse_or("CODE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 5)?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            database_url,
            storage_backend,
            base_url,
            listen_addr,
            log_level,
            log_format,
            code_policy,
            code_max_attempts,
            db_max_connections,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `database_url` is not a SQLite URL
    /// - `code_max_attempts` is outside 1..=32
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_backend == StorageBackend::Sqlite
            && !self.database_url.starts_with("sqlite:")
        {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !(1..=32).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 32, got {}",
                self.code_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        match self.storage_backend {
            StorageBackend::Sqlite => tracing::info!(
                "  Storage: sqlite ({}, {} connections)",
                self.database_url,
                self.db_max_connections
            ),
            StorageBackend::Memory => tracing::info!("  Storage: memory (not persisted)"),
        }
        tracing::info!(
            "  Code policy: {} (max {} attempts)",
            self.code_policy,
            self.code_max_attempts
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a numeric variable, falling back to `default` when unset.
fn parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{v}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DATABASE_URL",
        "STORAGE_BACKEND",
        "BASE_URL",
        "LISTEN",
        "LOG_FORMAT",
        "CODE_POLICY",
        "CODE_MAX_ATTEMPTS",
        "DB_MAX_CONNECTIONS",
        "STATIC_DIR",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://urls.db".to_string(),
            storage_backend: StorageBackend::Sqlite,
            base_url: "http://localhost:8080".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_policy: CodePolicy::Content,
            code_max_attempts: 5,
            db_max_connections: 5,
            static_dir: "static".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        // The memory backend ignores DATABASE_URL
        config.storage_backend = StorageBackend::Memory;
        assert!(config.validate().is_ok());

        config.code_max_attempts = 0;
        assert!(config.validate().is_err());

        config.code_max_attempts = 33;
        assert!(config.validate().is_err());

        config.code_max_attempts = 5;
        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://urls.db");
        assert_eq!(config.storage_backend, StorageBackend::Sqlite);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.code_policy, CodePolicy::Content);
        assert_eq!(config.code_max_attempts, 5);
        assert_eq!(config.static_dir, "static");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("STORAGE_BACKEND", "memory");
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("CODE_POLICY", "timestamped");
            env::set_var("CODE_MAX_ATTEMPTS", "8");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.code_policy, CodePolicy::Timestamped);
        assert_eq!(config.code_max_attempts, 8);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values() {
        clear_env();
        unsafe {
            env::set_var("CODE_POLICY", "random");
        }
        assert!(Config::from_env().is_err());

        clear_env();
        unsafe {
            env::set_var("CODE_MAX_ATTEMPTS", "many");
        }
        assert!(Config::from_env().is_err());

        clear_env();
        unsafe {
            env::set_var("STORAGE_BACKEND", "redis");
        }
        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    fn test_storage_backend_from_str() {
        assert_eq!("SQLite".parse::<StorageBackend>(), Ok(StorageBackend::Sqlite));
        assert_eq!("memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert!("postgres".parse::<StorageBackend>().is_err());
    }
}
