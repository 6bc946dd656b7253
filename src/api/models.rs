//! Request and response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{ApiError, FieldError};
use crate::client::Action;
use crate::domains::database::TranscriptMessage;

/// Input schema for action execution requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The action to execute (one of: hello, goodbye, browse_files, query_db).
    pub action: String,

    /// Argument passed to the selected action.
    pub value: String,

    /// Session whose transcript records this exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

impl ActionRequest {
    /// Check every field, reporting all failures at once.
    pub fn validate(&self) -> Result<Action, ApiError> {
        let mut errors = Vec::new();

        let action = self.action.parse::<Action>().ok();
        if action.is_none() {
            errors.push(FieldError::body(
                "action",
                format!("action must be one of: {}", Action::supported()),
            ));
        }

        if self.value.trim().is_empty() {
            errors.push(FieldError::body("value", "value must not be empty"));
        }

        match action {
            Some(action) if errors.is_empty() => Ok(action),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Output schema for action execution responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: String,
    pub value: String,
    pub response: String,
}

/// A stored session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTranscript {
    pub session_id: Uuid,
    pub messages: Vec<TranscriptMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(action: &str, value: &str) -> ActionRequest {
        ActionRequest {
            action: action.to_string(),
            value: value.to_string(),
            session_id: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(request("query_db", "SELECT 1").validate().unwrap(), Action::QueryDb);
    }

    #[test]
    fn test_both_fields_reported() {
        match request("sing", " ").validate() {
            Err(ApiError::Validation(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.loc[1].as_str()).collect();
                assert_eq!(fields, vec!["action", "value"]);
                assert_eq!(
                    errors[0].msg,
                    "action must be one of: hello, goodbye, browse_files, query_db"
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_session_id_optional() {
        let parsed: ActionRequest =
            serde_json::from_str(r#"{"action":"hello","value":"Ada"}"#).unwrap();
        assert!(parsed.session_id.is_none());
    }
}
