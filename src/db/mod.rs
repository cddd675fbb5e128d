//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all donation data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::Config;

/// Open the shared connection pool.
///
/// The pool connects lazily so a missing database only surfaces on the
/// first request unless strict startup asked for it up front.
pub fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let db_url = match &config.database_url {
        Some(url) => url.clone(),
        None => {
            // Ensure the parent directory exists
            if let Some(parent) = config.db_path.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            format!("sqlite:{}?mode=rwc", config.db_path.display())
        }
    };

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    Ok(SqlitePoolOptions::new()
        .max_connections(10)
        .connect_lazy_with(options))
}

/// Create the donations table and its indexes if they do not exist.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS donations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            donor_name TEXT NOT NULL,
            email TEXT,
            amount REAL NOT NULL,
            cause TEXT NOT NULL,
            message TEXT,
            is_anonymous INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the cause filter and the default sort
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_donations_cause ON donations(cause);
        CREATE INDEX IF NOT EXISTS idx_donations_created_at ON donations(created_at);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
