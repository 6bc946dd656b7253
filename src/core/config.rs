//! Configuration management for browse-me.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a local `.env` file, or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use super::error::{Error, Result};
use crate::domains::database::DatabaseUrl;

/// Main configuration structure.
///
/// This struct contains all configurable aspects of the server, the client
/// and the HTTP façade, organized by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,

    /// Target database configuration.
    pub database: DatabaseConfig,

    /// How the client launches the server subprocess.
    pub client: ClientConfig,

    /// HTTP façade configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Line format.
    pub format: LogFormat,

    /// Optional file that receives a copy of every log line.
    pub file: Option<PathBuf>,
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory for path operations.
    /// If None, no path restrictions are enforced.
    pub root_path: Option<PathBuf>,

    /// Whether to allow symlinks in path validation.
    /// If true, symlinks are followed and their targets are validated.
    /// If false, symlinks pointing outside the root are rejected.
    pub allow_symlinks: bool,
}

/// Configuration for the queried database.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string (`sqlite:///path.db` or `postgres://...`).
    pub url: Option<String>,

    /// Base directory for relative SQLite paths.
    pub project_root: PathBuf,
}

/// Connection strings may carry passwords.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("project_root", &self.project_root)
            .finish()
    }
}

/// How the client starts the MCP server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server executable. Defaults to the running executable.
    pub server_command: Option<PathBuf>,

    /// Arguments passed to the server executable.
    pub server_args: Vec<String>,
}

/// HTTP façade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    pub host: String,

    /// Enable CORS for browser clients.
    pub enable_cors: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            // No root path restriction by default
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            project_root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            enable_cors: true,
        }
    }
}

impl HttpConfig {
    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-browse-me".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::default(),
                file: None,
            },
            security: SecurityConfig::default(),
            database: DatabaseConfig::default(),
            client: ClientConfig {
                server_command: None,
                server_args: vec!["serve".to_string()],
            },
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is read first; variables that
    /// are already set in the process environment take precedence over it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("MCP_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(format) => config.logging.format = format,
                None => warn!("Ignoring unknown MCP_LOG_FORMAT '{}'", format),
            }
        }

        if let Some(file) = lookup("MCP_LOG_FILE") {
            config.logging.file = Some(PathBuf::from(file));
        }

        // Load security configuration
        if let Some(root_path) = lookup("MCP_ROOT_PATH") {
            config.security.root_path = Some(PathBuf::from(root_path));
            info!(
                "Path security enabled: root directory set to {:?}",
                config.security.root_path
            );
        }

        if let Some(allow_symlinks) = lookup("MCP_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = allow_symlinks.parse().unwrap_or(true);
        }

        // Database
        config.database.url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if let Some(root) = lookup("MCP_PROJECT_ROOT") {
            config.database.project_root = PathBuf::from(root);
        }

        // Client
        if let Some(command) = lookup("MCP_SERVER_COMMAND") {
            config.client.server_command = Some(PathBuf::from(command));
        }
        if let Some(args) = lookup("MCP_SERVER_ARGS") {
            config.client.server_args = args.split_whitespace().map(str::to_string).collect();
        }

        // HTTP façade
        if let Some(host) = lookup("MCP_HTTP_HOST") {
            config.http.host = host;
        }
        if let Some(port) = lookup("MCP_HTTP_PORT") {
            match port.parse() {
                Ok(port) => config.http.port = port,
                Err(_) => warn!("Ignoring invalid MCP_HTTP_PORT '{}'", port),
            }
        }
        if let Some(cors) = lookup("MCP_HTTP_CORS") {
            config.http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        config
    }

    /// Check settings that can only be judged as a whole.
    pub fn validate(&self) -> Result<()> {
        // Database tools report a bad URL per call; startup only warns.
        if let Some(url) = &self.database.url {
            if let Err(e) = DatabaseUrl::parse(url, &self.database.project_root) {
                warn!("{}", e);
            }
        }
        if self.client.server_command.is_some() && self.client.server_args.is_empty() {
            warn!("MCP_SERVER_COMMAND is set without MCP_SERVER_ARGS");
        }
        if self.http.host.trim().is_empty() {
            return Err(Error::config("MCP_HTTP_HOST must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.server.name, "mcp-browse-me");
        assert_eq!(config.client.server_args, vec!["serve".to_string()]);
        assert!(config.database.url.is_none());
        assert_eq!(config.http.address(), "127.0.0.1:8080");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:///data/chinook.db"),
            ("MCP_PROJECT_ROOT", "/srv/app"),
            ("MCP_HTTP_PORT", "9000"),
            ("MCP_HTTP_CORS", "false"),
            ("MCP_LOG_FORMAT", "json"),
            ("MCP_SERVER_COMMAND", "/usr/local/bin/browse-me"),
            ("MCP_SERVER_ARGS", "serve --quiet"),
        ]));
        assert_eq!(
            config.database.url.as_deref(),
            Some("sqlite:///data/chinook.db")
        );
        assert_eq!(config.database.project_root, PathBuf::from("/srv/app"));
        assert_eq!(config.http.port, 9000);
        assert!(!config.http.enable_cors);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.client.server_args, vec!["serve", "--quiet"]);
    }

    #[test]
    fn test_invalid_port_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[("MCP_HTTP_PORT", "eighty")]));
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn test_blank_database_url_is_unset() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")]));
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_database_url_redacted_in_debug() {
        let config = Config::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://admin:hunter2@db/chinook",
        )]));
        let debug_str = format!("{:?}", config.database);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_validate_tolerates_unknown_scheme() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "mysql://h/db")]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_host() {
        let config = Config::from_lookup(lookup_from(&[("MCP_HTTP_HOST", " ")]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
