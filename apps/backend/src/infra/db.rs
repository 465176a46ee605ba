use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Keeps the single in-memory connection from being recycled, which would
/// drop the database with it.
const MEMORY_DB_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Get database engine name for logging
fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Connection options for the given kind.
///
/// Every connection to `sqlite::memory:` opens its own empty database, so the
/// in-memory pool is pinned to a single long-lived connection.
fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(CONNECT_TIMEOUT).sqlx_logging(false);

    match kind {
        DbKind::SqliteMemory => {
            opts.max_connections(1)
                .min_connections(1)
                .idle_timeout(MEMORY_DB_LIFETIME)
                .max_lifetime(MEMORY_DB_LIFETIME);
        }
        DbKind::SqliteFile => {
            opts.max_connections(4);
        }
        DbKind::Postgres => {
            opts.max_connections(16);
        }
    }
    opts
}

/// Open a connection pool. Does NOT run any migrations.
pub async fn connect_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    let conn = Database::connect(connect_options(kind, url)).await?;
    Ok(conn)
}

/// Single entrypoint used by the server and tests: connect, then migrate up.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let start = Instant::now();
    let conn = connect_db(kind).await?;

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;

    info!(
        engine = db_engine(kind),
        db_kind = ?kind,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "db_bootstrap=ready"
    );
    Ok(conn)
}
