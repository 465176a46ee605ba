use std::sync::Arc;

use crate::config::db::DbKind;
use crate::config::server::SessionConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::session_store::{MokaSessionStore, SessionStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_kind: Option<DbKind>,
    session_config: SessionConfig,
    session_store: Option<Arc<dyn SessionStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_kind: None,
            session_config: SessionConfig::default(),
            session_store: None,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Use a caller-provided store instead of the default moka cache.
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let sessions = self
            .session_store
            .unwrap_or_else(|| Arc::new(MokaSessionStore::new(self.session_config)));

        if let Some(kind) = self.db_kind {
            // single entrypoint: build + migrate
            let conn = bootstrap_db(kind).await?;
            Ok(AppState::new(conn, sessions))
        } else {
            Ok(AppState::new_without_db(sessions))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
