//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session stores (in-memory, YAML files)
//! - `forms` - Form materializer and reader
//! - `http` - REST API over axum

pub mod forms;
pub mod http;
pub mod storage;

pub use forms::InMemoryFormRepository;
pub use storage::{FileSessionStore, InMemorySessionStore};
