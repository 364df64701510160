//! HTTP surface.
//!
//! | Route           | Method        | Behaviour                                |
//! |-----------------|---------------|------------------------------------------|
//! | `/`             | GET           | upload form                              |
//! | `/api/procesar` | GET           | health probe (`{status, db, users}`)     |
//! | `/api/procesar` | POST          | multipart review (`{resultado, prompt}`) |
//! | `/api/procesar` | anything else | 405, `Allow: GET, POST`                  |

pub mod handlers;
pub mod page;
pub mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::ComplianceError;
use crate::pipeline::llm::CompletionClient;
use crate::store::{PgUserStore, UserStore};

/// Shared state behind every request.
pub struct AppState {
    pub client: CompletionClient,
    pub store: Arc<dyn UserStore>,
}

/// Build the router with a Postgres-backed user store.
pub fn build_router(config: &ServiceConfig) -> Result<Router, ComplianceError> {
    let store = Arc::new(PgUserStore::new(config.database_url.clone()));
    router_with_store(config, store)
}

/// Build the router around any [`UserStore`].
pub fn router_with_store(
    config: &ServiceConfig,
    store: Arc<dyn UserStore>,
) -> Result<Router, ComplianceError> {
    let state = Arc::new(AppState {
        client: CompletionClient::new(config)?,
        store,
    });

    Ok(Router::new()
        .route("/", get(page::index))
        .route("/api/procesar", any(handlers::procesar))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(config: &ServiceConfig, addr: SocketAddr) -> Result<(), ComplianceError> {
    let app = build_router(config)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ComplianceError::Internal(format!("cannot bind {}: {}", addr, e)))?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app)
        .await
        .map_err(|e| ComplianceError::Internal(format!("server error: {}", e)))
}
