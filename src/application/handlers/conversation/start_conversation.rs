//! StartConversationHandler - Open a new form-building session

use std::sync::Arc;

use tracing::info;

use crate::domain::conversation::{prompts, DialogueStep, Session};
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to start a conversation
#[derive(Debug, Clone, Default)]
pub struct StartConversationCommand {
    /// Caller-chosen session id; a UUID is generated when absent.
    pub session_id: Option<String>,
}

/// Result of starting a conversation
#[derive(Debug, Clone)]
pub struct StartConversationResult {
    pub session_id: SessionId,
    pub message: String,
    pub state: DialogueStep,
}

/// Error type for starting conversations
#[derive(Debug, Clone)]
pub enum StartConversationError {
    /// A session with this id already exists
    AlreadyExists(SessionId),
    /// Caller-supplied id is malformed
    InvalidSessionId(String),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for StartConversationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartConversationError::AlreadyExists(id) => {
                write!(f, "Conversation already exists: {}", id)
            }
            StartConversationError::InvalidSessionId(err) => {
                write!(f, "Invalid session id: {}", err)
            }
            StartConversationError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for StartConversationError {}

impl From<SessionStoreError> for StartConversationError {
    fn from(err: SessionStoreError) -> Self {
        StartConversationError::Storage(err.to_string())
    }
}

/// Handler for starting conversations
pub struct StartConversationHandler {
    store: Arc<dyn SessionStore>,
}

impl StartConversationHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartConversationCommand,
    ) -> Result<StartConversationResult, StartConversationError> {
        // 1. Resolve the session id
        let session_id = match cmd.session_id {
            Some(raw) => SessionId::parse(raw)
                .map_err(|e| StartConversationError::InvalidSessionId(e.to_string()))?,
            None => SessionId::new(),
        };

        // 2. Create and persist, refusing to overwrite an existing conversation
        let session = Session::start(session_id.clone());
        if !self.store.insert_new(&session).await? {
            return Err(StartConversationError::AlreadyExists(session_id));
        }

        info!(session_id = %session_id, "conversation started");

        Ok(StartConversationResult {
            session_id,
            message: prompts::WELCOME.to_string(),
            state: session.state().step(),
        })
    }
}
