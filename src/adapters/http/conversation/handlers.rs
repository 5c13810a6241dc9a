//! HTTP handlers for conversation endpoints.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::{
    GetHistoryError, GetHistoryHandler, GetHistoryQuery, ProcessMessageCommand,
    ProcessMessageError, ProcessMessageHandler, StartConversationCommand, StartConversationError,
    StartConversationHandler,
};
use crate::domain::conversation::DialogueEngine;
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::ports::{FormMaterializer, SessionStore};

use super::super::error::ErrorResponse;
use super::dto::{
    HistoryResponse, MessageResponse, SendMessageRequest, StartConversationRequest,
    StartConversationResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConversationAppState {
    start_handler: Arc<StartConversationHandler>,
    message_handler: Arc<ProcessMessageHandler>,
    history_handler: Arc<GetHistoryHandler>,
    session_locks: Arc<SessionLocks>,
}

/// One async mutex per session id, so messages for the same session are
/// processed one at a time. Idle entries are dropped on the next lookup.
#[derive(Default)]
struct SessionLocks {
    inner: Mutex<HashMap<SessionId, Arc<tokio::sync::Mutex<()>>>>,
}

impl SessionLocks {
    fn lock_for(&self, id: &SessionId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.entry(id.clone()).or_default().clone()
    }
}

impl ConversationAppState {
    pub fn new(
        store: Arc<dyn SessionStore>,
        forms: Arc<dyn FormMaterializer>,
        engine: Arc<DialogueEngine>,
    ) -> Self {
        Self {
            start_handler: Arc::new(StartConversationHandler::new(store.clone())),
            message_handler: Arc::new(ProcessMessageHandler::new(store.clone(), forms, engine)),
            history_handler: Arc::new(GetHistoryHandler::new(store)),
            session_locks: Arc::default(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/conversation/start - Start a new conversation
pub async fn start_conversation(
    State(state): State<ConversationAppState>,
    body: Option<Json<StartConversationRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = StartConversationCommand {
        session_id: req.session_id,
    };

    match state.start_handler.handle(cmd).await {
        Ok(result) => {
            let response: StartConversationResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_start_error(e),
    }
}

/// POST /api/conversation/:session_id/message - Send a user message
pub async fn send_message(
    State(state): State<ConversationAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    // A malformed id can never name a stored session.
    let Ok(parsed) = SessionId::parse(session_id.as_str()) else {
        return session_not_found(&session_id);
    };

    let lock = state.session_locks.lock_for(&parsed);
    let _serialized = lock.lock().await;

    let cmd = ProcessMessageCommand {
        session_id: parsed,
        message: req.message,
    };

    match state.message_handler.handle(cmd).await {
        Ok(result) => {
            let response: MessageResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_message_error(e),
    }
}

/// GET /api/conversation/:session_id/history - Read the message log
pub async fn get_history(
    State(state): State<ConversationAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(parsed) = SessionId::parse(session_id.as_str()) else {
        let response = HistoryResponse {
            session_id,
            messages: Vec::new(),
        };
        return (StatusCode::OK, Json(response)).into_response();
    };

    match state
        .history_handler
        .handle(GetHistoryQuery { session_id: parsed })
        .await
    {
        Ok(result) => {
            let response: HistoryResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(GetHistoryError::Storage(e)) => internal_error(&e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn session_not_found(id: &str) -> Response {
    ErrorResponse::not_found(ErrorCode::SessionNotFound, "Session", id)
        .with_status(StatusCode::NOT_FOUND)
}

fn internal_error(detail: &str) -> Response {
    error!(error = detail, "conversation request failed");
    ErrorResponse::internal().with_status(StatusCode::INTERNAL_SERVER_ERROR)
}

fn handle_start_error(error: StartConversationError) -> Response {
    match error {
        StartConversationError::AlreadyExists(id) => {
            ErrorResponse::conflict(
                ErrorCode::SessionAlreadyExists,
                format!("Session already exists: {}", id),
            )
                .with_status(StatusCode::CONFLICT)
        }
        StartConversationError::InvalidSessionId(msg) => {
            ErrorResponse::bad_request(msg).with_status(StatusCode::BAD_REQUEST)
        }
        StartConversationError::Storage(msg) => internal_error(&msg),
    }
}

fn handle_message_error(error: ProcessMessageError) -> Response {
    match error {
        ProcessMessageError::SessionNotFound(id) => session_not_found(id.as_str()),
        ProcessMessageError::Storage(msg) => internal_error(&msg),
        ProcessMessageError::Domain(e) => internal_error(&e.to_string()),
    }
}
