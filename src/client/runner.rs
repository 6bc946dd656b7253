//! Running actions against a freshly spawned server.

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::{info, instrument};

use super::{Action, ClientError, ToolReply, ToolSession};
use crate::core::config::ClientConfig;

/// Something that can run a client action to completion.
///
/// The HTTP façade depends on this trait rather than on process spawning.
#[async_trait]
pub trait ActionRunner: Send + Sync {
    async fn run(&self, action: Action, value: &str) -> Result<ToolReply, ClientError>;
}

/// Starts one server subprocess per action and tears it down afterwards.
#[derive(Debug, Clone)]
pub struct SubprocessRunner {
    config: ClientConfig,
}

impl SubprocessRunner {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Build the server command.
    ///
    /// Without a configured command the running executable is used. A
    /// configured path (anything with a directory part) must exist; a bare
    /// program name is looked up on `PATH` at spawn time.
    pub fn server_command(&self) -> Result<Command, ClientError> {
        let program = match &self.config.server_command {
            Some(program) => {
                if has_directory(program) && !program.exists() {
                    return Err(ClientError::ServerNotFound(program.clone()));
                }
                program.clone()
            }
            None => std::env::current_exe().map_err(ClientError::Spawn)?,
        };

        let mut command = Command::new(program);
        command.args(&self.config.server_args);
        Ok(command)
    }
}

fn has_directory(program: &Path) -> bool {
    program.is_absolute() || program.components().count() > 1
}

#[async_trait]
impl ActionRunner for SubprocessRunner {
    #[instrument(skip(self, value), fields(action = %action))]
    async fn run(&self, action: Action, value: &str) -> Result<ToolReply, ClientError> {
        let command = self.server_command()?;
        let session = ToolSession::spawn(command).await?;
        info!("Connected to MCP {} action handler", action);

        let reply = session.invoke(action, value).await;
        session.close().await;
        reply
    }
}
