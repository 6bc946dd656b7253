//! Domains module containing business logic organized by concern.
//!
//! - **tools**: the actions the MCP server exposes
//! - **database**: connection handling, query execution and transcripts

pub mod database;
pub mod tools;
