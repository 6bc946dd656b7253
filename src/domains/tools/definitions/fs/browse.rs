//! Browse files tool definition.
//!
//! Lists the entries of a directory after passing the path through the
//! path sanitizer.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::fs;
use std::io;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::core::security::{expand_home, validate_path};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the browse files tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BrowseFilesParams {
    /// The directory path to browse.
    pub path: String,

    /// Include hidden files (starting with '.')
    #[serde(default = "default_include_hidden")]
    pub include_hidden: bool,
}

fn default_include_hidden() -> bool {
    true
}

impl BrowseFilesParams {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            include_hidden: default_include_hidden(),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Browse files tool - lists the entries found at a path.
pub struct BrowseFilesTool;

impl BrowseFilesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "browse_files";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return a comma-separated list of files found at the given directory path.";

    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &BrowseFilesParams, config: &Config) -> Result<CallToolResult, ToolError> {
        let resolved = expand_home(&params.path);
        let shown = resolved.display().to_string();
        info!("Browsing files at: {}", shown);

        let path = validate_path(&resolved, &config.security).map_err(|e| {
            warn!("Path validation failed: {}", e);
            if e.is_not_found() {
                ToolError::execution_failed(format!("The path '{}' does not exist.", shown))
            } else if e.is_permission_denied() {
                permission_denied(&shown)
            } else {
                ToolError::execution_failed(format!("Path security validation failed: {}", e))
            }
        })?;

        if !path.is_dir() {
            return Err(ToolError::execution_failed(format!(
                "The path '{}' is not a directory.",
                shown
            )));
        }

        let entries = fs::read_dir(&path).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => permission_denied(&shown),
            _ => ToolError::execution_failed(format!("Failed to read '{}': {}", shown, e)),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Error reading entry: {}", e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if !params.include_hidden && name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        names.sort();

        info!("Listed {} entries in {}", names.len(), shown);

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Files at {}: {}",
            shown,
            names.join(", ")
        ))]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<BrowseFilesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some("Browse files".into()),
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
                let params: BrowseFilesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params, &config).or_else(ToolError::into_call_result)
            }
            .boxed()
        })
    }
}

fn permission_denied(shown: &str) -> ToolError {
    ToolError::execution_failed(format!("Permission denied while accessing '{}'.", shown))
}

// ============================================================================
// Tests
// ============================================================================
