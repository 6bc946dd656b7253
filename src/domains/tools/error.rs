//! Tool-specific error types.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The tool ran but could not complete; the message is user-facing.
    #[error("{0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error for a single field.
    pub fn invalid_field(field: &str, msg: impl std::fmt::Display) -> Self {
        Self::InvalidArguments(format!("{}: {}", field, msg))
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Turn the error into what the client receives.
    ///
    /// Invalid arguments are protocol errors; execution failures are tool
    /// results flagged as errors so the caller still gets readable text.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            Self::InvalidArguments(msg) => Err(McpError::invalid_params(msg, None)),
            Self::ExecutionFailed(msg) => Ok(CallToolResult::error(vec![Content::text(msg)])),
        }
    }
}
