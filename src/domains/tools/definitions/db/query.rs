//! Query database tool definition.
//!
//! Runs arbitrary SQL against the database named by `DATABASE_URL`.

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
use crate::domains::database::execute_sql;
use crate::domains::tools::ToolError;

/// Parameters for the query database tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryDatabaseParams {
    /// SQL query to execute against DATABASE_URL.
    pub query: String,
}

/// Query database tool - executes one SQL statement.
pub struct QueryDatabaseTool;

impl QueryDatabaseTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "query_database";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Run arbitrary SQL against the configured database and return the rows as a text table.";

    #[instrument(skip_all)]
    pub async fn execute(
        params: &QueryDatabaseParams,
        config: &Config,
    ) -> Result<CallToolResult, ToolError> {
        info!("Executing SQL query: {}", params.query);

        let outcome = match configured_url(config) {
            Ok(url) => execute_sql(&url, &params.query).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                error!("Failed to execute query: {}", e);
                Err(ToolError::execution_failed(format!(
                    "Failed to execute query: {}",
                    e
                )))
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<QueryDatabaseParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Query database".into()),
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
                let params: QueryDatabaseParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params, &config)
                    .await
                    .or_else(ToolError::into_call_result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::first_text;
    use tempfile::TempDir;

    fn sqlite_config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.database.url = Some("sqlite:///music.db".to_string());
        config.database.project_root = dir.path().to_path_buf();
        config
    }

    fn query(sql: &str) -> QueryDatabaseParams {
        QueryDatabaseParams {
            query: sql.to_string(),
        }
    }

    #[tokio::test]
    async fn test_query_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = sqlite_config(&dir);

        QueryDatabaseTool::execute(&query("CREATE TABLE Artist (ArtistId INTEGER, Name TEXT)"), &config)
            .await
            .unwrap();
        QueryDatabaseTool::execute(&query("INSERT INTO Artist VALUES (1, 'AC/DC')"), &config)
            .await
            .unwrap();

        let result = QueryDatabaseTool::execute(&query("SELECT COUNT(*) AS n FROM Artist"), &config)
            .await
            .unwrap();
        let text = first_text(&result);
        assert!(text.starts_with("n"));
        assert!(text.lines().nth(2).unwrap().starts_with('1'));
    }

    #[tokio::test]
    async fn test_invalid_sql_is_error_string() {
        let dir = TempDir::new().unwrap();
        let config = sqlite_config(&dir);

        let err = QueryDatabaseTool::execute(&query("SELEC * FROM"), &config)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to execute query: "));

        // Delivered as an error result, not a protocol fault
        let result = err.into_call_result().unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_missing_database_url() {
        let err = QueryDatabaseTool::execute(&query("SELECT 1"), &Config::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL is not set"));
    }
}
