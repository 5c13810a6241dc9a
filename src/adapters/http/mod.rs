//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure. `api_router`
//! mounts them together with the health check and the shared middleware.

pub mod conversation;
pub mod error;
pub mod forms;

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use conversation::{conversation_router, ConversationAppState};
pub use error::ErrorResponse;
pub use forms::{forms_router, FormsAppState};

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Allowed CORS origins; empty or `*` allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates the full API router.
///
/// Routes:
/// - `GET /health` - Liveness check
/// - `/api/conversation/...` - see [`conversation_router`]
/// - `/api/forms/...` - see [`forms_router`]
pub fn api_router(
    conversation: ConversationAppState,
    forms: FormsAppState,
    settings: &HttpSettings,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(conversation_router().with_state(conversation))
        .merge(forms_router().with_state(forms))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
