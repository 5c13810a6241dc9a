//! ProcessMessageHandler - Run one dialogue step for a session
//!
//! Load, advance, materialize if the engine asks for it, apply, save.
//! Only one message per session may be in flight at a time; the caller
//! is responsible for serializing requests per session id.
//!
//! A form that was materialized but whose completed session could not be
//! saved is remembered here, keyed by session, and reused on the next
//! materialization of the same configuration instead of creating a second
//! form.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::domain::conversation::{Advance, DialogueEngine, DialogueStep};
use crate::domain::form::FormConfiguration;
use crate::domain::foundation::{DomainError, FormId, SessionId};
use crate::ports::{FormMaterializer, MaterializeError, SessionStore, SessionStoreError};

/// Command to process a user message
#[derive(Debug, Clone)]
pub struct ProcessMessageCommand {
    pub session_id: SessionId,
    pub message: String,
}

/// Result of processing a message
#[derive(Debug, Clone)]
pub struct ProcessMessageResult {
    pub message: String,
    pub state: DialogueStep,
    /// Set once the session is completed.
    pub form_id: Option<FormId>,
    /// Iframe snippet for the form, set alongside `form_id`.
    pub embed_code: Option<String>,
}

/// Error type for processing messages
#[derive(Debug, Clone)]
pub enum ProcessMessageError {
    /// No session with this id
    SessionNotFound(SessionId),
    /// Storage error
    Storage(String),
    /// Domain error
    Domain(DomainError),
}

impl std::fmt::Display for ProcessMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessMessageError::SessionNotFound(id) => {
                write!(f, "Conversation not found: {}", id)
            }
            ProcessMessageError::Storage(err) => write!(f, "Storage error: {}", err),
            ProcessMessageError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ProcessMessageError {}

impl From<DomainError> for ProcessMessageError {
    fn from(err: DomainError) -> Self {
        ProcessMessageError::Domain(err)
    }
}

impl From<SessionStoreError> for ProcessMessageError {
    fn from(err: SessionStoreError) -> Self {
        ProcessMessageError::Storage(err.to_string())
    }
}

/// Handler for user messages
pub struct ProcessMessageHandler {
    store: Arc<dyn SessionStore>,
    forms: Arc<dyn FormMaterializer>,
    engine: Arc<DialogueEngine>,
    unsaved: Mutex<HashMap<SessionId, (FormId, FormConfiguration)>>,
}

impl ProcessMessageHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        forms: Arc<dyn FormMaterializer>,
        engine: Arc<DialogueEngine>,
    ) -> Self {
        Self {
            store,
            forms,
            engine,
            unsaved: Mutex::new(HashMap::new()),
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessMessageCommand,
    ) -> Result<ProcessMessageResult, ProcessMessageError> {
        // 1. Load the session
        let mut session = self
            .store
            .load(&cmd.session_id)
            .await?
            .ok_or_else(|| ProcessMessageError::SessionNotFound(cmd.session_id.clone()))?;
        let from = session.state().step();

        // 2. Advance, running the materializer if the engine asks for it
        let mut materialized = None;
        let turn = match self.engine.advance(&session, &cmd.message) {
            Advance::Reply(turn) => turn,
            Advance::Materialize(config) => match self.materialize(&cmd.session_id, &config).await {
                Ok(form_id) => {
                    materialized = Some((form_id, config));
                    self.engine.completion(&session, form_id)
                }
                Err(e) => {
                    warn!(
                        session_id = %cmd.session_id,
                        error = %e,
                        "form materialization failed, keeping session in {}", from
                    );
                    self.engine.materialize_failed(&session)
                }
            },
        };
        let reply = turn.reply.clone();

        // 3. Record the exchange and persist
        session.apply_turn(&cmd.message, turn)?;
        match (self.store.save(&session).await, materialized) {
            (Ok(()), Some(_)) => self.forget_unsaved(&cmd.session_id),
            (Ok(()), None) => {}
            (Err(e), Some((form_id, config))) => {
                // The form exists; answer with it and keep it for the retry.
                warn!(
                    session_id = %cmd.session_id,
                    form_id = %form_id,
                    error = %e,
                    "completed session could not be saved"
                );
                self.remember_unsaved(&cmd.session_id, form_id, config);
            }
            (Err(e), None) => return Err(e.into()),
        }

        let state = session.state().step();
        debug!(session_id = %cmd.session_id, %from, to = %state, "dialogue step");

        let form_id = session.state().form_id();
        Ok(ProcessMessageResult {
            message: reply,
            state,
            form_id,
            embed_code: form_id.map(|id| self.engine.links().embed_code(id)),
        })
    }

    /// Creates the form, or reuses one already created for this session and
    /// configuration whose completion was never saved.
    async fn materialize(
        &self,
        session_id: &SessionId,
        config: &FormConfiguration,
    ) -> Result<FormId, MaterializeError> {
        if let Some(form_id) = self.unsaved_form_for(session_id, config) {
            debug!(session_id = %session_id, form_id = %form_id, "reusing unsaved form");
            return Ok(form_id);
        }
        let form_id = self.forms.materialize(config).await?;
        info!(
            session_id = %session_id,
            form_id = %form_id,
            form_name = config.name(),
            "form materialized"
        );
        Ok(form_id)
    }

    fn unsaved_form_for(&self, session_id: &SessionId, config: &FormConfiguration) -> Option<FormId> {
        let unsaved = self.unsaved.lock().unwrap_or_else(PoisonError::into_inner);
        unsaved
            .get(session_id)
            .filter(|(_, saved_config)| saved_config == config)
            .map(|(form_id, _)| *form_id)
    }

    fn remember_unsaved(&self, session_id: &SessionId, form_id: FormId, config: FormConfiguration) {
        self.unsaved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id.clone(), (form_id, config));
    }

    fn forget_unsaved(&self, session_id: &SessionId) {
        self.unsaved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id);
    }
}
