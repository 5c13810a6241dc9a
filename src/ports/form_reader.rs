//! Form Reader Port (read side).
//!
//! Read-only access to materialized forms, for listing and rendering.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::form::FormConfiguration;
use crate::domain::foundation::{FormId, Timestamp};

/// A materialized form as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRecord {
    pub id: FormId,
    pub config: FormConfiguration,
    pub created_at: Timestamp,
}

/// Errors that can occur while reading forms
#[derive(Debug, thiserror::Error)]
pub enum FormReadError {
    #[error("Form storage unavailable: {0}")]
    Unavailable(String),
}

/// Read-only port for stored forms
#[async_trait]
pub trait FormReader: Send + Sync {
    /// Get a form by id. Returns `None` if it does not exist.
    async fn get(&self, id: FormId) -> Result<Option<FormRecord>, FormReadError>;

    /// List all forms, oldest first.
    async fn list(&self) -> Result<Vec<FormRecord>, FormReadError>;
}
