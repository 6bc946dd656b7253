//! MCP server handler.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and routed through the ToolRouter built in `domains/tools/router.rs`.
//! Adding a new tool does not require modifying this file.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The MCP server handler.
///
/// Implements `ServerHandler` from rmcp; every request is dispatched to a
/// tool through the router.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(config.clone()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    fn instructions() -> String {
        format!(
            "Greets people, browses directories and queries the configured database. \
             Available tools: {}.",
            ToolRegistry::tool_names().join(", ")
        )
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_reports_name_and_tools() {
        let mut config = Config::default();
        config.server.name = "browse-test".to_string();
        let server = McpServer::new(config);

        let info = server.get_info();
        assert_eq!(info.server_info.name, "browse-test");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("query_database"));
    }
}
