//! Environment-derived application configuration.
//!
//! The database URL comes from `DATABASE_URL`, or from a vault-style JSON
//! credentials file (`{"db_connection": "..."}`) named by
//! `DB_CREDENTIALS_FILE` when the URL is unset.

use std::env;
use std::fs;

use serde::Deserialize;
use thiserror::Error;

/// Configuration failures surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `HTTP_PORT` did not parse as a port number.
    #[error("HTTP_PORT is not a valid port number: {value}")]
    InvalidPort { value: String },

    /// `DB_POOL_MAX_SIZE` did not parse as a pool size.
    #[error("DB_POOL_MAX_SIZE is not a valid pool size: {value}")]
    InvalidPoolSize { value: String },

    /// Neither `DATABASE_URL` nor `DB_CREDENTIALS_FILE` was provided.
    #[error("database configuration missing: set DATABASE_URL or DB_CREDENTIALS_FILE")]
    MissingDatabaseUrl,

    /// The credentials file could not be read.
    #[error("error while opening credentials file at {path}: {source}")]
    CredentialsFile {
        path: String,
        source: std::io::Error,
    },

    /// The credentials file did not hold the expected JSON document.
    #[error("error while decoding credentials file: {source}")]
    CredentialsDecode { source: serde_json::Error },
}

/// Vault-style credentials file payload.
#[derive(Debug, Deserialize)]
struct DbCredentials {
    db_connection: String,
}

/// Runtime configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub pool_max_size: u32,
}

impl AppConfig {
    /// Resolve configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());
        let port = parse_port(env::var("HTTP_PORT").ok().as_deref())?;
        let pool_max_size = parse_pool_size(env::var("DB_POOL_MAX_SIZE").ok().as_deref())?;
        let database_url = resolve_database_url(
            env::var("DATABASE_URL").ok(),
            env::var("DB_CREDENTIALS_FILE").ok(),
        )?;

        Ok(Self {
            host,
            port,
            database_url,
            pool_max_size,
        })
    }
}

fn parse_port(value: Option<&str>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(8080),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort {
            value: raw.to_owned(),
        }),
    }
}

fn parse_pool_size(value: Option<&str>) -> Result<u32, ConfigError> {
    match value {
        None => Ok(10),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPoolSize {
            value: raw.to_owned(),
        }),
    }
}

fn resolve_database_url(
    url: Option<String>,
    credentials_path: Option<String>,
) -> Result<String, ConfigError> {
    if let Some(url) = url {
        return Ok(url);
    }
    let path = credentials_path.ok_or(ConfigError::MissingDatabaseUrl)?;
    let contents = fs::read_to_string(&path)
        .map_err(|source| ConfigError::CredentialsFile { path, source })?;
    parse_credentials(&contents)
}

fn parse_credentials(json: &str) -> Result<String, ConfigError> {
    let credentials: DbCredentials =
        serde_json::from_str(json).map_err(|source| ConfigError::CredentialsDecode { source })?;
    Ok(credentials.db_connection)
}
