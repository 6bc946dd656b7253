//! Database tools.
//!
//! Both tools resolve `DATABASE_URL` on every call and surface any failure
//! as an error result rather than a protocol fault.

pub mod list_tables;
pub mod query;

pub use list_tables::ListTablesTool;
pub use query::{QueryDatabaseParams, QueryDatabaseTool};

use crate::core::config::Config;
use crate::domains::database::{DatabaseError, DatabaseUrl};

/// Parse the configured connection string.
fn configured_url(config: &Config) -> Result<DatabaseUrl, DatabaseError> {
    let raw = config
        .database
        .url
        .as_deref()
        .ok_or(DatabaseError::NotConfigured)?;
    DatabaseUrl::parse(raw, &config.database.project_root)
}
