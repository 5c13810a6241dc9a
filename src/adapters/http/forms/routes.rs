//! Route configuration for form endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_form, list_forms, FormsAppState};

/// Creates the forms router.
///
/// Routes:
/// - `GET /api/forms` - List materialized forms
/// - `GET /api/forms/:id` - Get one form
pub fn forms_router() -> Router<FormsAppState> {
    Router::new()
        .route("/api/forms", get(list_forms))
        .route("/api/forms/:id", get(get_form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::adapters::InMemoryFormRepository;
    use crate::domain::form::{FieldSpec, FormConfiguration, Theme};
    use crate::ports::FormMaterializer;

    async fn app_with_one_form() -> Router {
        let forms = Arc::new(InMemoryFormRepository::new());
        let config = FormConfiguration::new(
            "Order",
            None,
            Theme::Elegant,
            true,
            vec![
                FieldSpec::dropdown("Size", ["S", "M", "L"]).unwrap(),
                FieldSpec::gdpr_consent(),
            ],
        )
        .unwrap();
        forms.materialize(&config).await.unwrap();
        forms_router().with_state(FormsAppState::new(forms))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn list_forms_returns_all() {
        let (status, json) = get(app_with_one_form().await, "/api/forms").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 1);
        assert_eq!(json["forms"][0]["name"], "Order");
    }

    #[tokio::test]
    async fn get_form_by_id() {
        let (status, json) = get(app_with_one_form().await, "/api/forms/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["fields"][0]["options"], serde_json::json!(["S", "M", "L"]));
        assert_eq!(json["fields"][1]["name"], "gdpr_consent");
    }

    #[tokio::test]
    async fn get_unknown_form_is_404() {
        let (status, json) = get(app_with_one_form().await, "/api/forms/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "FORM_NOT_FOUND");
    }

    #[tokio::test]
    async fn get_non_numeric_form_id_is_400() {
        let (status, _) = get(app_with_one_form().await, "/api/forms/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
