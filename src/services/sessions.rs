use crate::models::{SearchCriteria, SearchSession, SortKey};
use crate::services::store::{JsonStoreExt, KeyValueStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur with session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Session key builder
pub struct SessionKey;

impl SessionKey {
    /// Build a store key for a search session
    pub fn session(id: &str) -> String {
        format!("session:{}", id)
    }
}

/// Search sessions persisted as JSON in an injected key-value store
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Open a new idle session with a fresh id
    pub fn create(&self, criteria: SearchCriteria, sort: SortKey) -> Result<SearchSession, SessionError> {
        let session = SearchSession::new(uuid::Uuid::new_v4().to_string(), criteria, sort);
        self.save(&session)?;

        tracing::debug!("Created session {}", session.id);
        Ok(session)
    }

    pub fn load(&self, id: &str) -> Result<SearchSession, SessionError> {
        self.store
            .get_json(&SessionKey::session(id))?
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Overwrite the stored session; the last save for an id wins
    pub fn save(&self, session: &SearchSession) -> Result<(), SessionError> {
        self.store.set_json(&SessionKey::session(&session.id), session)?;
        Ok(())
    }

    pub fn remove(&self, id: &str) {
        self.store.remove(&SessionKey::session(id));
    }
}
