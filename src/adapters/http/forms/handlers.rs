//! HTTP handlers for form endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::{
    GetFormError, GetFormHandler, GetFormQuery, ListFormsError, ListFormsHandler,
};
use crate::domain::foundation::{ErrorCode, FormId};
use crate::ports::FormReader;

use super::super::error::ErrorResponse;
use super::dto::{FormListResponse, FormResponse};

#[derive(Clone)]
pub struct FormsAppState {
    get_handler: Arc<GetFormHandler>,
    list_handler: Arc<ListFormsHandler>,
}

impl FormsAppState {
    pub fn new(reader: Arc<dyn FormReader>) -> Self {
        Self {
            get_handler: Arc::new(GetFormHandler::new(reader.clone())),
            list_handler: Arc::new(ListFormsHandler::new(reader)),
        }
    }
}

/// GET /api/forms - List materialized forms
pub async fn list_forms(State(state): State<FormsAppState>) -> Response {
    match state.list_handler.handle().await {
        Ok(records) => {
            let response: FormListResponse = records.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(ListFormsError::Storage(e)) => internal_error(&e),
    }
}

/// GET /api/forms/:id - Get one form
pub async fn get_form(State(state): State<FormsAppState>, Path(id): Path<String>) -> Response {
    let form_id = match id.parse::<FormId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid form ID").with_status(StatusCode::BAD_REQUEST)
        }
    };

    match state.get_handler.handle(GetFormQuery { form_id }).await {
        Ok(record) => {
            let response: FormResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(GetFormError::NotFound(id)) => {
            ErrorResponse::not_found(ErrorCode::FormNotFound, "Form", &id.to_string())
                .with_status(StatusCode::NOT_FOUND)
        }
        Err(GetFormError::Storage(e)) => internal_error(&e),
    }
}

fn internal_error(detail: &str) -> Response {
    error!(error = detail, "form request failed");
    ErrorResponse::internal().with_status(StatusCode::INTERNAL_SERVER_ERROR)
}
