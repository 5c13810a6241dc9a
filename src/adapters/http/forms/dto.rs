//! HTTP DTOs for form endpoints.

use serde::Serialize;

use crate::domain::form::FormConfiguration;
use crate::ports::FormRecord;

/// A stored form: its id and creation time plus the configuration record.
#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    pub id: u64,
    pub created_at: String,
    #[serde(flatten)]
    pub config: FormConfiguration,
}

impl From<FormRecord> for FormResponse {
    fn from(record: FormRecord) -> Self {
        Self {
            id: record.id.value(),
            created_at: record.created_at.to_string(),
            config: record.config,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormListResponse {
    pub forms: Vec<FormResponse>,
    pub total: usize,
}

impl From<Vec<FormRecord>> for FormListResponse {
    fn from(records: Vec<FormRecord>) -> Self {
        let forms: Vec<FormResponse> = records.into_iter().map(FormResponse::from).collect();
        Self {
            total: forms.len(),
            forms,
        }
    }
}
