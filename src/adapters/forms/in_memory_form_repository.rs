//! In-Memory Form Repository
//!
//! Materializes forms into a process-local list. Ids are allocated
//! sequentially from 1 and never reused.
//!
//! Failures can be queued to exercise the dialogue's retry path:
//!
//! ```ignore
//! let forms = InMemoryFormRepository::new()
//!     .with_failure(MaterializeError::Unavailable("db down".into()));
//! assert!(forms.materialize(&config).await.is_err());
//! assert!(forms.materialize(&config).await.is_ok());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::RwLock;

use crate::domain::form::FormConfiguration;
use crate::domain::foundation::{FormId, Timestamp};
use crate::ports::{
    FormMaterializer, FormReadError, FormReader, FormRecord, MaterializeError,
};

/// In-memory form store.
#[derive(Debug, Clone)]
pub struct InMemoryFormRepository {
    forms: Arc<RwLock<Vec<FormRecord>>>,
    next_id: Arc<AtomicU64>,
    /// Errors returned by the next `materialize` calls, in order.
    failures: Arc<Mutex<VecDeque<MaterializeError>>>,
    /// Number of `materialize` calls, successful or not.
    calls: Arc<AtomicUsize>,
}

impl Default for InMemoryFormRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFormRepository {
    pub fn new() -> Self {
        Self {
            forms: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
            failures: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queues an error for the next `materialize` call.
    pub fn with_failure(self, error: MaterializeError) -> Self {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(error);
        self
    }

    /// Returns the number of `materialize` calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns the number of stored forms.
    pub async fn count(&self) -> usize {
        self.forms.read().await.len()
    }

    fn next_failure(&self) -> Option<MaterializeError> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

#[async_trait]
impl FormMaterializer for InMemoryFormRepository {
    async fn materialize(&self, config: &FormConfiguration) -> Result<FormId, MaterializeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.next_failure() {
            return Err(error);
        }
        config
            .validate()
            .map_err(|e| MaterializeError::Rejected(e.to_string()))?;

        let id = FormId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.forms.write().await.push(FormRecord {
            id,
            config: config.clone(),
            created_at: Timestamp::now(),
        });
        Ok(id)
    }
}

#[async_trait]
impl FormReader for InMemoryFormRepository {
    async fn get(&self, id: FormId) -> Result<Option<FormRecord>, FormReadError> {
        let forms = self.forms.read().await;
        Ok(forms.iter().find(|record| record.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<FormRecord>, FormReadError> {
        Ok(self.forms.read().await.clone())
    }
}
