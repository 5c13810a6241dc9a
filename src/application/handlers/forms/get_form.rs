//! GetFormHandler - Query a materialized form

use std::sync::Arc;

use crate::domain::foundation::FormId;
use crate::ports::{FormReadError, FormReader, FormRecord};

/// Query to get a form
#[derive(Debug, Clone, Copy)]
pub struct GetFormQuery {
    pub form_id: FormId,
}

/// Error type for getting a form
#[derive(Debug, Clone)]
pub enum GetFormError {
    /// Form not found
    NotFound(FormId),
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for GetFormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetFormError::NotFound(id) => write!(f, "Form not found: {}", id),
            GetFormError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for GetFormError {}

impl From<FormReadError> for GetFormError {
    fn from(err: FormReadError) -> Self {
        GetFormError::Storage(err.to_string())
    }
}

/// Handler for fetching one form
pub struct GetFormHandler {
    reader: Arc<dyn FormReader>,
}

impl GetFormHandler {
    pub fn new(reader: Arc<dyn FormReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetFormQuery) -> Result<FormRecord, GetFormError> {
        self.reader
            .get(query.form_id)
            .await?
            .ok_or(GetFormError::NotFound(query.form_id))
    }
}
