use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Storage engine backing the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbKind {
    /// PostgreSQL, configured through `POSTGRES_*` and `QUIZ_DB*` variables
    Postgres,
    /// SQLite database file (created on first connect)
    SqliteFile,
    /// Private in-memory SQLite database, used by tests
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "unsupported database kind '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Resolve the database kind from `QUIZ_DB_KIND` (defaults to a SQLite file).
pub fn db_kind_from_env() -> Result<DbKind, AppError> {
    match env::var("QUIZ_DB_KIND") {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(DbKind::SqliteFile),
        Err(e) => Err(AppError::config(format!("failed to read QUIZ_DB_KIND: {e}"))),
    }
}

/// Builds a database URL from environment variables for the given kind
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("QUIZ_DB")?;
            let username = must_var("QUIZ_DB_USER")?;
            let password = must_var("QUIZ_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        DbKind::SqliteFile => {
            let path = env::var("QUIZ_SQLITE_PATH").unwrap_or_else(|_| "leaderboard.db".to_string());
            // mode=rwc creates the file on first connect
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
