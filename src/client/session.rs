//! A client session with one MCP server.

use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, JsonObject, RawContent},
    service::RunningService,
    transport::{IntoTransport, TokioChildProcess},
};
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::{Action, ClientError};

const NO_CONTENT: &str = "No response content received";

/// Text returned by a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolReply {
    /// The first content item of the result, when it is text.
    pub text: String,
    /// Whether the server flagged the result as an error.
    pub is_error: bool,
}

impl From<CallToolResult> for ToolReply {
    fn from(result: CallToolResult) -> Self {
        let text = match result.content.first().map(|content| &content.raw) {
            Some(RawContent::Text(text)) => text.text.clone(),
            _ => NO_CONTENT.to_string(),
        };

        Self {
            text,
            is_error: result.is_error.unwrap_or(false),
        }
    }
}

/// An initialized MCP session.
pub struct ToolSession {
    service: RunningService<RoleClient, ()>,
}

impl ToolSession {
    /// Initialize a session over any rmcp transport.
    pub async fn connect<T, E, A>(transport: T) -> Result<Self, ClientError>
    where
        T: IntoTransport<RoleClient, E, A>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let service = ()
            .serve(transport)
            .await
            .map_err(|e| ClientError::Initialize(e.to_string()))?;

        if let Some(info) = service.peer_info() {
            debug!(
                "Connected to {} v{}",
                info.server_info.name, info.server_info.version
            );
        }

        Ok(Self { service })
    }

    /// Spawn a server process and initialize a session over its stdio.
    pub async fn spawn(command: Command) -> Result<Self, ClientError> {
        let transport = TokioChildProcess::new(command).map_err(ClientError::Spawn)?;
        Self::connect(transport).await
    }

    /// Names of the tools the server exposes.
    pub async fn tool_names(&self) -> Result<Vec<String>, ClientError> {
        let tools = self.service.list_all_tools().await?;
        Ok(tools.into_iter().map(|t| t.name.to_string()).collect())
    }

    /// Call a tool by name.
    pub async fn call(&self, tool: &str, arguments: JsonObject) -> Result<ToolReply, ClientError> {
        let request: CallToolRequestParam = serde_json::from_value(serde_json::json!({
            "name": tool,
            "arguments": arguments,
        }))?;
        let result = self.service.call_tool(request).await?;
        Ok(result.into())
    }

    /// Run a client action: list the tools, then call the mapped one.
    pub async fn invoke(&self, action: Action, value: &str) -> Result<ToolReply, ClientError> {
        let tools = self.tool_names().await?;
        info!("Available tools: {:?}", tools);

        let reply = self.call(action.tool_name(), action.arguments(value)).await?;
        if reply.is_error {
            warn!("Tool {} reported an error: {}", action.tool_name(), reply.text);
        }
        Ok(reply)
    }

    /// End the session; a spawned server process is torn down with it.
    pub async fn close(self) {
        if let Err(e) = self.service.cancel().await {
            warn!("Error while closing MCP session: {}", e);
        }
    }
}
