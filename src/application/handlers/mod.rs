//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod conversation;
pub mod forms;

pub use conversation::{
    GetHistoryError, GetHistoryHandler, GetHistoryQuery, GetHistoryResult, ProcessMessageCommand,
    ProcessMessageError, ProcessMessageHandler, ProcessMessageResult, StartConversationCommand,
    StartConversationError, StartConversationHandler, StartConversationResult,
};
pub use forms::{GetFormError, GetFormHandler, GetFormQuery, ListFormsError, ListFormsHandler};
