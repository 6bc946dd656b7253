pub mod goodbye;
pub mod hello;

pub use goodbye::{SayGoodbyeParams, SayGoodbyeTool};
pub use hello::{SayHelloParams, SayHelloTool};

use super::super::ToolError;

/// Reject blank names with a field-level message.
fn require_name(name: &str) -> Result<&str, ToolError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_field("name", "must not be empty"));
    }
    Ok(name)
}
