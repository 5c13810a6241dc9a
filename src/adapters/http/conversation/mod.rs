//! HTTP adapter for the form-building conversation.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatMessageDto, HistoryResponse, MessageResponse, SendMessageRequest,
    StartConversationRequest, StartConversationResponse,
};
pub use handlers::ConversationAppState;
pub use routes::conversation_router;
