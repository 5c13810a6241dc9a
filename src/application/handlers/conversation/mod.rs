//! Conversation Command and Query Handlers
//!
//! CQRS handlers for the form-building dialogue.
//!
//! ## Commands
//! - `StartConversation` - Create a session and return the welcome prompt
//! - `ProcessMessage` - Run one dialogue step, materializing the form on completion
//!
//! ## Queries
//! - `GetHistory` - Read a session's message log

mod get_history;
mod process_message;
mod start_conversation;

pub use get_history::{GetHistoryError, GetHistoryHandler, GetHistoryQuery, GetHistoryResult};
pub use process_message::{
    ProcessMessageCommand, ProcessMessageError, ProcessMessageHandler, ProcessMessageResult,
};
pub use start_conversation::{
    StartConversationCommand, StartConversationError, StartConversationHandler,
    StartConversationResult,
};
