//! The HTTP façade driving a real in-process MCP server.

#![cfg(feature = "http")]

mod common;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use browse_me::Config;
use browse_me::api::{AppState, build_router};
use browse_me::client::{Action, ActionRunner, ClientError, ToolReply};
use common::{in_process_session, load_sample_schema, sqlite_config};
use http_body_util::BodyExt;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Opens a fresh in-memory session per action, like the subprocess runner.
struct InProcessRunner {
    config: Config,
}

#[async_trait]
impl ActionRunner for InProcessRunner {
    async fn run(&self, action: Action, value: &str) -> Result<ToolReply, ClientError> {
        let session = in_process_session(self.config.clone()).await;
        let reply = session.invoke(action, value).await;
        session.close().await;
        reply
    }
}

async fn post_action(config: Config, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let runner: Arc<dyn ActionRunner> = Arc::new(InProcessRunner {
        config: config.clone(),
    });
    let app = build_router(AppState::new(runner, None, &config), false);

    let request = Request::post("/actions")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_hello_through_the_facade() {
    let (status, body) = post_action(
        Config::default(),
        serde_json::json!({ "action": "hello", "value": "Alice" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "action": "hello",
            "value": "Alice",
            "response": "Hello, Alice!"
        })
    );
}

#[tokio::test]
async fn test_tool_error_is_still_200() {
    let (status, body) = post_action(
        Config::default(),
        serde_json::json!({ "action": "browse_files", "value": "/definitely/not/here" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].as_str().unwrap().contains("does not exist"));
}

#[tokio::test]
async fn test_query_through_the_facade() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let (status, body) = post_action(
        config,
        serde_json::json!({
            "action": "query_db",
            "value": "SELECT \"Name\" FROM \"Artist\" ORDER BY \"ArtistId\""
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response = body["response"].as_str().unwrap();
    let lines: Vec<_> = response.lines().map(str::trim_end).collect();
    assert_eq!(lines, vec!["Name", "---------", "AC/DC", "Accept", "Aerosmith"]);
}
