//! browse-me entry point.
//!
//! `browse-me <action> <value>` runs one client action; `browse-me serve`
//! runs the MCP server on stdio; `browse-me api` runs the HTTP façade.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use tracing::{error, info};

use browse_me::client::{ClientError, run_client_action};
use browse_me::core::{Config, init_logging};

#[derive(Debug, Parser)]
#[command(name = "browse-me", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    action: ActionArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the MCP server over stdin/stdout
    #[cfg(feature = "stdio")]
    Serve,

    /// Run the HTTP façade
    #[cfg(feature = "http")]
    Api,
}

#[derive(Debug, Args)]
struct ActionArgs {
    /// One of: hello, goodbye, browse_files, query_db
    action: Option<String>,

    /// Argument passed to the action
    value: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::from_env();
    let _log_guard = init_logging(&config.logging);
    config.validate()?;

    match cli.command {
        #[cfg(feature = "stdio")]
        Some(Command::Serve) => {
            info!("Starting {} v{}", config.server.name, config.server.version);
            let server = browse_me::McpServer::new(config);
            browse_me::core::StdioTransport::run(server).await?;
            info!("Server shutting down");
            Ok(ExitCode::SUCCESS)
        }
        #[cfg(feature = "http")]
        Some(Command::Api) => {
            browse_me::api::ApiServer::new(config).run().await?;
            Ok(ExitCode::SUCCESS)
        }
        None => run_action(cli.action, &config).await,
    }
}

async fn run_action(args: ActionArgs, config: &Config) -> Result<ExitCode> {
    let (Some(action), Some(value)) = (args.action, args.value) else {
        print_usage();
        return Ok(ExitCode::FAILURE);
    };

    info!("Starting MCP {} action with input: {}", action, value);

    match run_client_action(&action, &value, &config.client).await {
        Ok(reply) => {
            println!("\nServer Response: {}\n", reply.text);
            Ok(if reply.is_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Err(e @ ClientError::UnknownAction { .. }) => {
            error!("{}", e);
            print_usage();
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_usage() {
    println!(
        "Usage: browse-me <action> <value>\n\
         Actions: {}\n\
         Examples:\n  \
           browse-me hello Alice\n  \
           browse-me browse_files .\n  \
           browse-me query_db \"SELECT COUNT(*) FROM \\\"Track\\\";\"\n\
         \n\
         Other commands:\n  \
           browse-me serve   run the MCP server on stdin/stdout\n  \
           browse-me api     run the HTTP façade",
        browse_me::client::Action::supported()
    );
}
