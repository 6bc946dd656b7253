//! Greeting tool definition.

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

/// Parameters for the greeting tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SayHelloParams {
    /// The name of the person to greet.
    #[schemars(length(min = 1))]
    pub name: String,
}

/// Greeting tool - returns a friendly greeting.
pub struct SayHelloTool;

impl SayHelloTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "say_hello";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Say hello to someone by name.";

    #[instrument(skip_all, fields(name = %params.name))]
    pub fn execute(params: &SayHelloParams) -> Result<CallToolResult, ToolError> {
        let name = require_name(&params.name)?;
        info!("Generating greeting for: {}", name);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Hello, {}!",
            name
        ))]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SayHelloParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Say hello".into()),
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
                let params: SayHelloParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params).or_else(ToolError::into_call_result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::first_text;

    #[test]
    fn test_greeting_contains_name() {
        for name in ["Alice", "Zoë", "Jean-Luc Picard", "李"] {
            let params = SayHelloParams {
                name: name.to_string(),
            };
            let result = SayHelloTool::execute(&params).unwrap();
            assert_eq!(first_text(&result), format!("Hello, {}!", name));
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        for name in ["", "   "] {
            let params = SayHelloParams {
                name: name.to_string(),
            };
            let err = SayHelloTool::execute(&params).unwrap_err();
            assert_eq!(err.to_string(), "name: must not be empty");
        }
    }

    #[test]
    fn test_schema_requires_name() {
        let tool = SayHelloTool::to_tool();
        let required = tool.input_schema.get("required").cloned();
        assert_eq!(required, Some(serde_json::json!(["name"])));
    }
}
