//! Per-player round state, keyed by an opaque session id.
//!
//! Handlers never touch process-wide globals: they resolve the session id
//! from the request and go through the `SessionStore` held in `AppState`.

use std::fmt;

use async_trait::async_trait;
use moka::future::Cache;
use uuid::Uuid;

use crate::config::server::SessionConfig;
use crate::domain::RoundState;

/// Opaque identifier handed to the browser in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a cookie value; anything that isn't a UUID is treated as no session.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for rounds in progress.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn get(&self, id: &SessionId) -> Option<RoundState>;
    async fn put(&self, id: SessionId, state: RoundState);
    async fn remove(&self, id: &SessionId);
}

/// In-process store backed by a moka cache. Entries idle for longer than the
/// configured TTL are dropped, so abandoned rounds don't pile up.
pub struct MokaSessionStore {
    cache: Cache<SessionId, RoundState>,
}

impl MokaSessionStore {
    pub fn new(config: SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_idle(config.ttl)
            .build();
        Self { cache }
    }
}

impl Default for MokaSessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[async_trait]
impl SessionStore for MokaSessionStore {
    async fn get(&self, id: &SessionId) -> Option<RoundState> {
        self.cache.get(id).await
    }

    async fn put(&self, id: SessionId, state: RoundState) {
        self.cache.insert(id, state).await;
    }

    async fn remove(&self, id: &SessionId) {
        self.cache.invalidate(id).await;
    }
}
