//! Typed server configuration.
//!
//! DESIGN
//! ======
//! All environment reads happen here, once, at startup. The rest of the
//! server receives plain typed values, so handlers and the database layer
//! never consult ambient environment state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::site::SiteUrls;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL required")]
    MissingDatabaseUrl,
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// Everything the server needs from the environment, resolved up front.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Deployment URL candidates for site metadata resolution.
    pub site_urls: SiteUrls,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or `PORT` is present but
    /// not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        Ok(Self {
            port,
            database_url,
            db_max_connections,
            site_urls: SiteUrls::from_env(),
        })
    }
}
