//! The MCP client.
//!
//! A client action starts the server as a child process, initializes an
//! MCP session over its stdio, lists the available tools, calls the tool
//! mapped to the action and returns its text.

mod action;
mod error;
mod runner;
mod session;

pub use action::Action;
pub use error::ClientError;
pub use runner::{ActionRunner, SubprocessRunner};
pub use session::{ToolReply, ToolSession};

use crate::core::config::ClientConfig;

/// Run one action by name against a freshly spawned server.
///
/// Unknown actions are rejected before any process is started.
pub async fn run_client_action(
    action: &str,
    value: &str,
    config: &ClientConfig,
) -> Result<ToolReply, ClientError> {
    let action: Action = action.parse()?;
    SubprocessRunner::new(config.clone()).run(action, value).await
}
