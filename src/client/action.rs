//! The client action table.
//!
//! Every action maps to exactly one server tool and the single argument
//! that tool takes.

use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ClientError;
use crate::domains::tools::definitions::{
    BrowseFilesTool, QueryDatabaseTool, SayGoodbyeTool, SayHelloTool,
};

/// An action the client can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Hello,
    Goodbye,
    BrowseFiles,
    QueryDb,
}

impl Action {
    /// Every supported action, in display order.
    pub const ALL: [Action; 4] = [
        Action::Hello,
        Action::Goodbye,
        Action::BrowseFiles,
        Action::QueryDb,
    ];

    /// Name used on the command line and in HTTP requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Goodbye => "goodbye",
            Self::BrowseFiles => "browse_files",
            Self::QueryDb => "query_db",
        }
    }

    /// Server tool invoked by this action.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Hello => SayHelloTool::NAME,
            Self::Goodbye => SayGoodbyeTool::NAME,
            Self::BrowseFiles => BrowseFilesTool::NAME,
            Self::QueryDb => QueryDatabaseTool::NAME,
        }
    }

    /// Argument the value is passed as.
    pub fn argument_key(&self) -> &'static str {
        match self {
            Self::Hello | Self::Goodbye => "name",
            Self::BrowseFiles => "path",
            Self::QueryDb => "query",
        }
    }

    /// Tool arguments carrying `value`.
    pub fn arguments(&self, value: &str) -> JsonObject {
        let mut arguments = JsonObject::new();
        arguments.insert(
            self.argument_key().to_string(),
            serde_json::Value::String(value.to_string()),
        );
        arguments
    }

    /// Comma-separated list of supported action names.
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(Action::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ClientError::unknown_action(s))
    }
}
