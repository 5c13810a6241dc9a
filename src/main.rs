//! tid-forms server binary.
//!
//! Reads configuration from `TID_FORMS__*` environment variables (and a
//! `.env` file when present), wires the adapters, and serves the REST API.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tid_forms::adapters::http::{api_router, ConversationAppState, FormsAppState};
use tid_forms::adapters::{FileSessionStore, InMemoryFormRepository, InMemorySessionStore};
use tid_forms::config::{AppConfig, LogFormat, StorageBackend, ValidationError};
use tid_forms::domain::conversation::DialogueEngine;
use tid_forms::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let sessions: Arc<dyn SessionStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemorySessionStore::new()),
        StorageBackend::File => {
            let path = config
                .storage
                .path
                .as_ref()
                .ok_or(ValidationError::MissingRequired("storage.path"))?;
            Arc::new(FileSessionStore::new(path))
        }
    };
    let forms = Arc::new(InMemoryFormRepository::new());
    let engine = Arc::new(DialogueEngine::new(config.embed.links()));

    let app = api_router(
        ConversationAppState::new(sessions, forms.clone(), engine),
        FormsAppState::new(forms),
        &config.server.http_settings(),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        base_url = %config.embed.public_base_url,
        "tid-forms listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
