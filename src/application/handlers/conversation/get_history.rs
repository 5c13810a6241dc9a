//! GetHistoryHandler - Query a session's message log

use std::sync::Arc;

use crate::domain::conversation::ChatMessage;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Query to get a conversation's history
#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub session_id: SessionId,
}

/// Result of getting a conversation's history
#[derive(Debug, Clone)]
pub struct GetHistoryResult {
    pub session_id: SessionId,
    /// Oldest first. Empty when the session is unknown.
    pub messages: Vec<ChatMessage>,
}

/// Error type for getting history
#[derive(Debug, Clone)]
pub enum GetHistoryError {
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for GetHistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetHistoryError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for GetHistoryError {}

impl From<SessionStoreError> for GetHistoryError {
    fn from(err: SessionStoreError) -> Self {
        GetHistoryError::Storage(err.to_string())
    }
}

/// Handler for reading conversation history
pub struct GetHistoryHandler {
    store: Arc<dyn SessionStore>,
}

impl GetHistoryHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetHistoryQuery) -> Result<GetHistoryResult, GetHistoryError> {
        let messages = self
            .store
            .load(&query.session_id)
            .await?
            .map(|session| session.messages().to_vec())
            .unwrap_or_default();

        Ok(GetHistoryResult {
            session_id: query.session_id,
            messages,
        })
    }
}
