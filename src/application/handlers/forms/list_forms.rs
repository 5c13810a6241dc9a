//! ListFormsHandler - Query all materialized forms

use std::sync::Arc;

use crate::ports::{FormReadError, FormReader, FormRecord};

/// Error type for listing forms
#[derive(Debug, Clone)]
pub enum ListFormsError {
    /// Storage error
    Storage(String),
}

impl std::fmt::Display for ListFormsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFormsError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ListFormsError {}

impl From<FormReadError> for ListFormsError {
    fn from(err: FormReadError) -> Self {
        ListFormsError::Storage(err.to_string())
    }
}

/// Handler for listing forms
pub struct ListFormsHandler {
    reader: Arc<dyn FormReader>,
}

impl ListFormsHandler {
    pub fn new(reader: Arc<dyn FormReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<FormRecord>, ListFormsError> {
        Ok(self.reader.list().await?)
    }
}
