//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::Path;

use browse_me::client::ToolSession;
use browse_me::domains::database::{DatabaseUrl, execute_sql};
use browse_me::{Config, McpServer};
use rmcp::ServiceExt;

pub const SAMPLE_SCHEMA: &str = include_str!("../../fixtures/sample_schema.sql");

/// Config pointing at a SQLite file inside `dir`.
pub fn sqlite_config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.database.url = Some("sqlite:///catalogue.db".to_string());
    config.database.project_root = dir.to_path_buf();
    config
}

/// Load the sample schema into the database named by `config`.
pub async fn load_sample_schema(config: &Config) {
    let url = DatabaseUrl::parse(
        config.database.url.as_deref().unwrap(),
        &config.database.project_root,
    )
    .unwrap();

    for statement in SAMPLE_SCHEMA.split(';') {
        let statement: String = statement
            .lines()
            .filter(|line| !line.trim_start().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n");
        if statement.trim().is_empty() {
            continue;
        }
        execute_sql(&url, &statement).await.unwrap();
    }
}

/// Serve `config` in-process and connect a client over an in-memory pipe.
pub async fn in_process_session(config: Config) -> ToolSession {
    let (client_io, server_io) = tokio::io::duplex(64 * 1024);

    tokio::spawn(async move {
        let server = McpServer::new(config);
        if let Ok(service) = server.serve(server_io).await {
            let _ = service.waiting().await;
        }
    });

    ToolSession::connect(client_io).await.unwrap()
}
