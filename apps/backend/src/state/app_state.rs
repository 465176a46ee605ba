use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::session_store::{MokaSessionStore, SessionStore};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent in handler-only tests)
    db: Option<DatabaseConnection>,
    /// Rounds in progress, keyed by session id
    sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            db: Some(db),
            sessions,
        }
    }

    pub fn new_without_db(sessions: Arc<dyn SessionStore>) -> Self {
        Self { db: None, sessions }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }
}

impl Default for AppState {
    /// No database and a default in-memory session store.
    fn default() -> Self {
        Self::new_without_db(Arc::new(MokaSessionStore::default()))
    }
}
