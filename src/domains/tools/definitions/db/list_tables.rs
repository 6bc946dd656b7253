//! List tables tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::configured_url;
use crate::core::config::Config;
use crate::domains::database::{DatabaseError, execute_sql};
use crate::domains::tools::ToolError;

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTablesParams {}

/// List tables tool - lists tables of the configured database.
pub struct ListTablesTool;

impl ListTablesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_tables";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List tables in the configured database (SQLite or PostgreSQL).";

    #[instrument(skip_all)]
    pub async fn execute(config: &Config) -> Result<CallToolResult, ToolError> {
        let url = match configured_url(config) {
            Ok(url) => url,
            Err(DatabaseError::NotConfigured) => {
                return Err(ToolError::execution_failed("DATABASE_URL is not set."));
            }
            Err(e) => return Err(failed(e)),
        };
        info!("Listing tables ({})", url.dialect());

        execute_sql(&url, url.list_tables_query())
            .await
            .map(|text| CallToolResult::success(vec![Content::text(text)]))
            .map_err(failed)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListTablesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("List tables".into()),
        }
    }

    /// Create a ToolRoute for the server handler.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let _: ListTablesParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&config)
                    .await
                    .or_else(ToolError::into_call_result)
            }
            .boxed()
        })
    }
}

fn failed(e: DatabaseError) -> ToolError {
    error!("Failed to list tables: {}", e);
    ToolError::execution_failed(format!("Failed to list tables: {}", e))
}
