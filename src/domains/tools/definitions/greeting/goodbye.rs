//! Farewell tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::require_name;
use crate::domains::tools::ToolError;

/// Parameters for the farewell tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SayGoodbyeParams {
    /// The name of the person to bid farewell.
    #[schemars(length(min = 1))]
    pub name: String,
}

/// Farewell tool - returns a friendly farewell.
pub struct SayGoodbyeTool;

impl SayGoodbyeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "say_goodbye";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Say goodbye to someone by name.";

    #[instrument(skip_all, fields(name = %params.name))]
    pub fn execute(params: &SayGoodbyeParams) -> Result<CallToolResult, ToolError> {
        let name = require_name(&params.name)?;
        info!("Generating farewell for: {}", name);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Goodbye, {}!",
            name
        ))]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SayGoodbyeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Say goodbye".into()),
        }
    }

    /// Create a ToolRoute for the server handler.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: SayGoodbyeParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params).or_else(ToolError::into_call_result)
            }
            .boxed()
        })
    }
}
