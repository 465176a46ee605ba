use std::env;
use std::time::Duration;

use crate::config::db::{db_kind_from_env, DbKind};
use crate::error::AppError;

const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
const DEFAULT_SESSION_CAPACITY: u64 = 10_000;

/// Limits for the in-process session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Idle time after which an unfinished round is discarded
    pub ttl: Duration,
    /// Upper bound on concurrently held sessions
    pub max_capacity: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            max_capacity: DEFAULT_SESSION_CAPACITY,
        }
    }
}

/// Everything `main` needs to boot the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub session: SessionConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("QUIZ_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("QUIZ_PORT", 3001u16)?;
        let db_kind = db_kind_from_env()?;

        let ttl_secs = parse_var("QUIZ_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        if ttl_secs == 0 {
            return Err(AppError::config("QUIZ_SESSION_TTL_SECS must be positive"));
        }
        let max_capacity = parse_var("QUIZ_SESSION_CAPACITY", DEFAULT_SESSION_CAPACITY)?;

        Ok(Self {
            host,
            port,
            db_kind,
            session: SessionConfig {
                ttl: Duration::from_secs(ttl_secs),
                max_capacity,
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}
