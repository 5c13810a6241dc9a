//! Form Adapters
//!
//! - **InMemoryFormRepository** - `FormMaterializer` and `FormReader` over a
//!   process-local list, with sequential ids starting at 1

mod in_memory_form_repository;

pub use in_memory_form_repository::InMemoryFormRepository;
