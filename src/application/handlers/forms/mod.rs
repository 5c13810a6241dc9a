//! Form Query Handlers
//!
//! Read side for materialized forms.
//!
//! ## Queries
//! - `GetForm` - Fetch one form by id
//! - `ListForms` - List all forms

mod get_form;
mod list_forms;

pub use get_form::{GetFormError, GetFormHandler, GetFormQuery};
pub use list_forms::{ListFormsError, ListFormsHandler};
