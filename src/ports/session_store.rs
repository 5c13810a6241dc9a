//! Session Store Port - Interface for persisting dialogue sessions.
//!
//! Sessions are independent of each other and addressed only by id.
//! Callers must not run two `process message` steps for the same id at
//! once; the store itself does not lock per key.

use async_trait::async_trait;

use crate::domain::conversation::Session;
use crate::domain::foundation::SessionId;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading dialogue sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a session.
    ///
    /// Returns `None` if no session exists for the id.
    async fn load(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError>;

    /// Insert or replace a session.
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Store a session only if none exists for its id, as one step.
    ///
    /// Returns `false`, leaving the stored session untouched, if the id is taken.
    async fn insert_new(&self, session: &Session) -> Result<bool, SessionStoreError>;

    /// Delete a session. Deleting an unknown id is not an error.
    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_error_messages() {
        let err = SessionStoreError::IoError("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");

        let err = SessionStoreError::DeserializationFailed("bad yaml".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
