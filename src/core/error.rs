//! Error types and handling for the browse-me server and client.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for browse-me operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for browse-me.
///
/// This enum captures all possible error conditions that can occur during
/// server, client or façade operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the database domain.
    #[error("Database error: {0}")]
    Database(#[from] crate::domains::database::DatabaseError),

    /// Error raised while running a client action.
    #[error("Client error: {0}")]
    Client(#[from] crate::client::ClientError),

    /// Error raised by the MCP transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
