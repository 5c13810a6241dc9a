//! Route configuration for conversation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_history, send_message, start_conversation, ConversationAppState};

/// Creates the conversation router.
///
/// Routes:
/// - `POST /api/conversation/start` - Start a conversation, optionally with a chosen id
/// - `POST /api/conversation/:session_id/message` - Send a user message
/// - `GET /api/conversation/:session_id/history` - Read the message log
pub fn conversation_router() -> Router<ConversationAppState> {
    Router::new()
        .route("/api/conversation/start", post(start_conversation))
        .route("/api/conversation/:session_id/message", post(send_message))
        .route("/api/conversation/:session_id/history", get(get_history))
}
