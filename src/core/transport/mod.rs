//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output: the client spawns it as
//! a child process and exchanges line-delimited JSON-RPC messages with it.

mod error;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use error::{TransportError, TransportResult};

#[cfg(feature = "stdio")]
pub use stdio::StdioTransport;
