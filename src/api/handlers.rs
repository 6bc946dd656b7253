//! Route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::AppState;
use super::error::ApiError;
use super::models::{ActionRequest, ActionResponse, SessionTranscript};
use crate::domains::database::TranscriptMessage;

/// Root handler - provides service info.
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.name.as_str(),
        "version": state.version.as_str(),
        "endpoints": {
            "actions": "POST /actions",
            "health": "GET /health",
            "sessions": "GET /sessions/{session_id}"
        }
    }))
}

/// Health check endpoint for readiness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Invoke the MCP client for the requested action/value pair.
#[instrument(skip_all, fields(action))]
pub async fn execute_action(
    State(state): State<AppState>,
    payload: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::Span::current().record("action", request.action.as_str());

    let action = request.validate()?;
    info!("API request for action '{}'", action);

    let reply = state.runner.run(action, &request.value).await?;

    if let Some(session_id) = request.session_id {
        record_exchange(&state, session_id, &request, &reply.text).await;
    }

    Ok(Json(ActionResponse {
        action: request.action,
        value: request.value,
        response: reply.text,
    }))
}

/// Return the stored transcript of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionTranscript>, ApiError> {
    let store = state
        .transcripts
        .as_ref()
        .ok_or_else(|| ApiError::Unavailable("DATABASE_URL is not set.".to_string()))?;

    let messages = store.load(session_id).await?;
    Ok(Json(SessionTranscript {
        session_id,
        messages,
    }))
}

/// Append one exchange to a session transcript; failures only get logged.
async fn record_exchange(state: &AppState, session_id: Uuid, request: &ActionRequest, reply: &str) {
    let Some(store) = state.transcripts.as_ref() else {
        warn!("session_id given but no transcript store is configured");
        return;
    };

    let exchange = [
        TranscriptMessage::user(format!("{} {}", request.action, request.value)),
        TranscriptMessage::assistant(reply),
    ];
    match store.append(session_id, exchange).await {
        Ok(messages) => info!(
            "Session {} now holds {} messages",
            session_id,
            messages.len()
        ),
        Err(e) => warn!("Failed to record transcript for {}: {}", session_id, e),
    }
}
