//! Tool Registry - the single list of every tool the server exposes.

use rmcp::model::Tool;

use super::definitions::{
    BrowseFilesTool, ListTablesTool, QueryDatabaseTool, SayGoodbyeTool, SayHelloTool,
};

/// Tool registry - names and metadata of all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            SayHelloTool::NAME,
            SayGoodbyeTool::NAME,
            BrowseFilesTool::NAME,
            QueryDatabaseTool::NAME,
            ListTablesTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SayHelloTool::to_tool(),
            SayGoodbyeTool::to_tool(),
            BrowseFilesTool::to_tool(),
            QueryDatabaseTool::to_tool(),
            ListTablesTool::to_tool(),
        ]
    }

    /// Whether a tool with this name exists.
    pub fn contains(name: &str) -> bool {
        Self::tool_names().contains(&name)
    }
}
