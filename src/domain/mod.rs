//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `form` - Form definitions, field classification and field collection
//! - `conversation` - The form-building dialogue: states, prompts, sessions and the engine

pub mod conversation;
pub mod form;
pub mod foundation;
