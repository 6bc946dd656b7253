//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for browse-me,
//! including error handling, configuration, logging, the MCP server
//! handler and its transport.

pub mod config;
pub mod error;
pub mod logging;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use security::{PathSecurityError, validate_path};
pub use server::McpServer;
#[cfg(feature = "stdio")]
pub use transport::StdioTransport;
pub use transport::{TransportError, TransportResult};
