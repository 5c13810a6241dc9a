//! In-Memory Session Store Adapter
//!
//! Keeps sessions in a process-wide map. Contents are lost on restart.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Session;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for dialogue sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id().clone(), session.clone());
        Ok(())
    }

    async fn insert_new(&self, session: &Session) -> Result<bool, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.entry(session.id().clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(session.clone());
                Ok(true)
            }
        }
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{Advance, DialogueEngine, FormLinks};

    #[tokio::test]
    async fn test_memory_store_save_and_load() {
        let store = InMemorySessionStore::new();
        let session = Session::start(SessionId::new());

        store.save(&session).await.unwrap();

        let loaded = store.load(session.id()).await.unwrap();
        assert_eq!(loaded, Some(session));
    }

    #[tokio::test]
    async fn test_memory_store_load_unknown_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.load(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_insert_new_and_delete() {
        let store = InMemorySessionStore::new();
        let session = Session::start(SessionId::new());

        assert!(store.insert_new(&session).await.unwrap());
        assert!(!store.insert_new(&Session::start(session.id().clone())).await.unwrap());
        assert_eq!(store.count().await, 1);

        store.delete(session.id()).await.unwrap();
        assert!(store.load(session.id()).await.unwrap().is_none());

        // Deleting again is a no-op
        store.delete(session.id()).await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_store_insert_new_keeps_existing_session() {
        let store = InMemorySessionStore::new();
        let id = SessionId::parse("taken").unwrap();
        let mut first = Session::start(id.clone());
        let engine = DialogueEngine::new(FormLinks::default());
        if let Advance::Reply(turn) = engine.advance(&first, "Survey") {
            first.apply_turn("Survey", turn).unwrap();
        }
        store.save(&first).await.unwrap();

        assert!(!store.insert_new(&Session::start(id.clone())).await.unwrap());
        assert_eq!(store.load(&id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = InMemorySessionStore::new();
        let clone = store.clone();

        clone.save(&Session::start(SessionId::new())).await.unwrap();
        assert_eq!(store.count().await, 1);
    }
}
