//! Database domain module.
//!
//! Pass-through access to the relational database selected by
//! `DATABASE_URL`: a SQLite file or a PostgreSQL server, chosen at runtime
//! through the sqlx `Any` driver.
//!
//! ## Architecture
//!
//! - `url.rs` - connection string parsing and dialect selection
//! - `query.rs` - one-shot statement execution
//! - `format.rs` - plain-text table rendering of result rows
//! - `transcript.rs` - chat transcript persistence keyed by session
//! - `error.rs` - database-specific error types

mod error;
mod format;
mod query;
mod transcript;
mod url;

pub use error::DatabaseError;
pub use format::{MAX_DISPLAY_ROWS, format_rows};
pub use query::execute_sql;
pub use transcript::{TranscriptMessage, TranscriptStore};
pub use url::DatabaseUrl;
