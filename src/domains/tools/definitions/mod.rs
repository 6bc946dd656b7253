//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by concern.

pub mod db;
pub mod fs;
pub mod greeting;

pub use db::{ListTablesTool, QueryDatabaseParams, QueryDatabaseTool};
pub use fs::{BrowseFilesParams, BrowseFilesTool};
pub use greeting::{SayGoodbyeParams, SayGoodbyeTool, SayHelloParams, SayHelloTool};
