//! HTTP adapter for materialized forms.

mod dto;
mod handlers;
mod routes;

pub use dto::{FormListResponse, FormResponse};
pub use handlers::FormsAppState;
pub use routes::forms_router;
