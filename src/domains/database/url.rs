//! Connection string handling.

use std::path::{Path, PathBuf};

use super::DatabaseError;

const SQLITE_PREFIX: &str = "sqlite:///";
const POSTGRES_PREFIXES: &[&str] = &["postgresql://", "postgres://"];

/// A parsed `DATABASE_URL`.
#[derive(Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// A SQLite database file.
    Sqlite(PathBuf),
    /// A PostgreSQL connection string, kept verbatim.
    Postgres(String),
}

impl DatabaseUrl {
    /// Parse a connection string.
    ///
    /// `sqlite:///data/chinook.db` names a file relative to `project_root`;
    /// an absolute path after the prefix is used as is.
    pub fn parse(url: &str, project_root: &Path) -> Result<Self, DatabaseError> {
        let url = url.trim();

        if let Some(raw_path) = url.strip_prefix(SQLITE_PREFIX) {
            let path = PathBuf::from(raw_path);
            let path = if path.is_absolute() {
                path
            } else {
                project_root.join(path)
            };
            return Ok(Self::Sqlite(path));
        }

        if POSTGRES_PREFIXES.iter().any(|p| url.starts_with(p)) {
            return Ok(Self::Postgres(url.to_string()));
        }

        Err(DatabaseError::unsupported_scheme(url))
    }

    /// The URL handed to the sqlx `Any` driver.
    pub fn connection_string(&self) -> String {
        match self {
            // mode=rwc creates the file on first use
            Self::Sqlite(path) => format!("sqlite://{}?mode=rwc", path.display()),
            Self::Postgres(url) => url.clone(),
        }
    }

    /// Dialect name for logging.
    pub fn dialect(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgresql",
        }
    }

    /// Catalogue query listing user tables.
    pub fn list_tables_query(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name;",
            Self::Postgres(_) => {
                "SELECT table_name FROM information_schema.tables \
                 WHERE table_schema='public' ORDER BY table_name;"
            }
        }
    }
}

/// PostgreSQL URLs may embed credentials.
impl std::fmt::Debug for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(path) => f.debug_tuple("Sqlite").field(path).finish(),
            Self::Postgres(_) => f.debug_tuple("Postgres").field(&"[REDACTED]").finish(),
        }
    }
}
