//! HTTP façade.
//!
//! A REST-like front for the client actions:
//! - `POST /actions` runs one action and echoes the request with the reply
//! - `GET /health` readiness probe
//! - `GET /sessions/{session_id}` stored transcript of a session
//! - `GET /` service info
//!
//! Each request is served independently; every action spawns its own
//! server subprocess through the configured [`ActionRunner`].

mod error;
mod handlers;
mod models;

pub use error::{ApiError, FieldError};
pub use models::{ActionRequest, ActionResponse, SessionTranscript};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::client::{ActionRunner, SubprocessRunner};
use crate::core::config::Config;
use crate::core::transport::{TransportError, TransportResult};
use crate::domains::database::{DatabaseUrl, TranscriptStore};

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    runner: Arc<dyn ActionRunner>,
    transcripts: Option<TranscriptStore>,
    name: Arc<String>,
    version: Arc<String>,
}

impl AppState {
    pub fn new(
        runner: Arc<dyn ActionRunner>,
        transcripts: Option<TranscriptStore>,
        config: &Config,
    ) -> Self {
        Self {
            runner,
            transcripts,
            name: Arc::new(config.server.name.clone()),
            version: Arc::new(config.server.version.clone()),
        }
    }
}

/// Build the façade router.
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_check))
        .route("/actions", post(handlers::execute_action))
        .route("/sessions/{session_id}", get(handlers::get_session))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(ServiceBuilder::new().layer(cors))
    } else {
        router
    }
}

/// Open the transcript store when a database is configured.
pub async fn connect_transcripts(config: &Config) -> Option<TranscriptStore> {
    let raw = config.database.url.as_deref()?;
    let url = match DatabaseUrl::parse(raw, &config.database.project_root) {
        Ok(url) => url,
        Err(e) => {
            warn!("Transcripts disabled: {}", e);
            return None;
        }
    };
    match TranscriptStore::connect(url).await {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("Transcripts disabled: {}", e);
            None
        }
    }
}

/// The HTTP façade server.
pub struct ApiServer {
    config: Config,
}

impl ApiServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Serve until the listener fails.
    pub async fn run(self) -> TransportResult<()> {
        let addr = self.config.http.address();

        let runner: Arc<dyn ActionRunner> =
            Arc::new(SubprocessRunner::new(self.config.client.clone()));
        let transcripts = connect_transcripts(&self.config).await;
        let state = AppState::new(runner, transcripts, &self.config);
        let app = build_router(state, self.config.http.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.http.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Actions: POST /actions");
        info!("  → Health:  GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}
