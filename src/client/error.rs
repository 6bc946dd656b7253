//! Client-side error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a client action.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The requested action is not one of the supported actions.
    #[error("Unknown action '{action}'. Expected one of {expected}")]
    UnknownAction { action: String, expected: String },

    /// The configured server executable does not exist.
    #[error("Could not find MCP server at {}. Ensure the project structure is intact.", .0.display())]
    ServerNotFound(PathBuf),

    /// The server process could not be started.
    #[error("Failed to start MCP server: {0}")]
    Spawn(#[source] std::io::Error),

    /// The MCP handshake with the server failed.
    #[error("Failed to initialize MCP session: {0}")]
    Initialize(String),

    /// A request on an established session failed.
    #[error("MCP request failed: {0}")]
    Service(#[from] rmcp::ServiceError),

    /// A request could not be encoded.
    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an "unknown action" error.
    pub fn unknown_action(action: impl Into<String>) -> Self {
        Self::UnknownAction {
            action: action.into(),
            expected: super::Action::supported(),
        }
    }

    /// Whether the error comes from the caller's input rather than the
    /// server or its environment.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnknownAction { .. })
    }
}
