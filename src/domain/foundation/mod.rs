//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, error types and the state machine trait
//! that the form and conversation modules build on.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{FormId, SessionId, MAX_SESSION_ID_LENGTH};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
