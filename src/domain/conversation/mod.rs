//! Conversation domain module.
//!
//! Drives the scripted form-building dialogue: one session per user, a
//! closed set of dialogue states, and a pure engine that maps each user
//! message to the next state and bot reply.

mod engine;
mod message;
pub mod prompts;
mod session;
mod state;

pub use engine::{Advance, DialogueEngine, Turn};
pub use message::{ChatMessage, Speaker};
pub use prompts::FormLinks;
pub use session::Session;
pub use state::{DialogueState, DialogueStep, PendingFields};
