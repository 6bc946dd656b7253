//! browse-me
//!
//! A small Model Context Protocol (MCP) system: a server exposing a handful
//! of tools over stdio, a client that spawns the server and invokes one tool
//! per action, and an HTTP façade forwarding the same actions.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, logging, the MCP server handler and
//!   its stdio transport, and the path sanitizer
//! - **domains**: business logic organized by concern
//!   - **tools**: the tools the server exposes
//!   - **database**: query execution and transcript persistence
//! - **client**: the action table and MCP client session
//! - **api**: the HTTP façade (feature `http`)
//!
//! # Example
//!
//! ```rust,no_run
//! use browse_me::{Config, client::run_client_action};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let reply = run_client_action("hello", "Alice", &config.client).await?;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

#[cfg(feature = "http")]
pub mod api;

pub use core::{Config, Error, McpServer, Result};
