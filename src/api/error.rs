//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::client::ClientError;
use crate::domains::database::DatabaseError;

/// A validation failure attached to one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Location of the field, e.g. `["body", "action"]`.
    pub loc: Vec<String>,
    /// What is wrong with it.
    pub msg: String,
}

impl FieldError {
    pub fn body(field: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
        }
    }
}

/// Errors returned by the HTTP façade.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed field validation.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// The request body could not be parsed.
    #[error("{0}")]
    UnprocessableBody(String),

    /// The request was understood but cannot be served.
    #[error("{0}")]
    BadRequest(String),

    /// A required backing service is not configured.
    #[error("{0}")]
    Unavailable(String),

    /// Anything that went wrong on our side.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => serde_json::json!({ "detail": errors }),
            other => serde_json::json!({ "detail": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        if err.is_caller_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::UnprocessableBody(rejection.body_text())
    }
}
