//! TiD Forms - Conversational Form Builder
//!
//! This crate implements the chat-driven form configuration dialogue: a
//! deterministic state machine that elicits a form's name, fields, GDPR
//! consent and theme, then hands the finished definition to storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
