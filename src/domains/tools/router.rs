//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    BrowseFilesTool, ListTablesTool, QueryDatabaseTool, SayGoodbyeTool, SayHelloTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SayHelloTool::create_route())
        .with_route(SayGoodbyeTool::create_route())
        .with_route(BrowseFilesTool::create_route(config.clone()))
        .with_route(QueryDatabaseTool::create_route(config.clone()))
        .with_route(ListTablesTool::create_route(config))
}
