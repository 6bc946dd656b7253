//! Database-specific error types.

use thiserror::Error;

/// Errors that can occur while talking to the configured database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No connection string was configured.
    #[error("DATABASE_URL is not set. Add it to .env or the environment before querying.")]
    NotConfigured,

    /// The connection string uses a scheme other than SQLite or PostgreSQL.
    #[error("Unsupported DATABASE_URL scheme in '{0}'.")]
    UnsupportedScheme(String),

    /// Failure reported by the driver (connection, syntax, constraint, ...).
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// A stored transcript could not be decoded or encoded.
    #[error("Invalid transcript document: {0}")]
    Document(#[from] serde_json::Error),
}

impl DatabaseError {
    /// Create an "unsupported scheme" error.
    pub fn unsupported_scheme(url: impl Into<String>) -> Self {
        Self::UnsupportedScheme(url.into())
    }
}
