//! Form Materializer Port - persists a finished form configuration.
//!
//! The dialogue calls this at most once per session, on the edge into
//! `completed`. The returned id is shown to the user verbatim.

use async_trait::async_trait;

use crate::domain::form::FormConfiguration;
use crate::domain::foundation::FormId;

/// Errors that can occur while materializing a form
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("Form storage unavailable: {0}")]
    Unavailable(String),

    #[error("Form rejected: {0}")]
    Rejected(String),
}

/// Port for turning a configuration into a durable form
#[async_trait]
pub trait FormMaterializer: Send + Sync {
    /// Persist the configuration and return the new form's id.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be reached
    /// - `Rejected` if the store refuses the configuration
    async fn materialize(&self, config: &FormConfiguration) -> Result<FormId, MaterializeError>;
}
