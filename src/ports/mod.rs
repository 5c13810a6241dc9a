//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - persistence for dialogue sessions, keyed by session id
//! - `FormMaterializer` - turns a finished configuration into a stored form
//! - `FormReader` - read side for stored forms

mod form_materializer;
mod form_reader;
mod session_store;

pub use form_materializer::{FormMaterializer, MaterializeError};
pub use form_reader::{FormReadError, FormReader, FormRecord};
pub use session_store::{SessionStore, SessionStoreError};
