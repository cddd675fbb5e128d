//! Configuration module for the donation backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full database connection string; takes precedence over `db_path`
    pub database_url: Option<String>,
    /// Path to the SQLite database file used when no URL is given
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Treat a storage bootstrap failure as fatal at startup
    pub strict_startup: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok();

        let db_path = env::var("DONATION_DB_PATH")
            .unwrap_or_else(|_| "./data/donations.sqlite".to_string())
            .into();

        let bind_addr = env::var("DONATION_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .expect("Invalid DONATION_BIND_ADDR format");

        let strict_startup = env::var("DONATION_STRICT_STARTUP")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_level = env::var("DONATION_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            db_path,
            bind_addr,
            strict_startup,
            log_level,
        }
    }
}
