//! End-to-end MCP sessions against an in-process server.

mod common;

use browse_me::Config;
use browse_me::client::{Action, ClientError};
use common::{in_process_session, load_sample_schema, sqlite_config};
use serde_json::json;
use tempfile::TempDir;

#[tokio::test]
async fn test_lists_every_tool() {
    let session = in_process_session(Config::default()).await;

    let mut tools = session.tool_names().await.unwrap();
    tools.sort();
    assert_eq!(
        tools,
        vec![
            "browse_files",
            "list_tables",
            "query_database",
            "say_goodbye",
            "say_hello"
        ]
    );

    session.close().await;
}

#[tokio::test]
async fn test_greetings() {
    let session = in_process_session(Config::default()).await;

    let reply = session.invoke(Action::Hello, "Alice").await.unwrap();
    assert_eq!(reply.text, "Hello, Alice!");
    assert!(!reply.is_error);

    let reply = session.invoke(Action::Goodbye, "Bob").await.unwrap();
    assert_eq!(reply.text, "Goodbye, Bob!");

    session.close().await;
}

#[tokio::test]
async fn test_empty_name_rejected_as_invalid_params() {
    let session = in_process_session(Config::default()).await;

    let err = session.invoke(Action::Hello, "").await.unwrap_err();
    assert!(matches!(err, ClientError::Service(_)));

    session.close().await;
}

#[tokio::test]
async fn test_unknown_tool_is_an_error() {
    let session = in_process_session(Config::default()).await;

    let arguments = json!({ "name": "Ada" }).as_object().cloned().unwrap();
    assert!(session.call("format_disk", arguments).await.is_err());

    session.close().await;
}

#[tokio::test]
async fn test_browse_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("b.txt"), "b").unwrap();
    std::fs::write(dir.path().join("a.txt"), "a").unwrap();
    std::fs::create_dir(dir.path().join("notes")).unwrap();

    let session = in_process_session(Config::default()).await;
    let reply = session
        .invoke(Action::BrowseFiles, dir.path().to_str().unwrap())
        .await
        .unwrap();

    assert!(!reply.is_error);
    assert!(reply.text.starts_with("Files at "));
    assert!(reply.text.ends_with(": a.txt, b.txt, notes"));

    session.close().await;
}

#[tokio::test]
async fn test_browse_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere");

    let session = in_process_session(Config::default()).await;
    let reply = session
        .invoke(Action::BrowseFiles, missing.to_str().unwrap())
        .await
        .unwrap();

    assert!(reply.is_error);
    assert!(reply.text.contains("does not exist"));

    session.close().await;
}

#[tokio::test]
async fn test_browse_outside_root_rejected() {
    let root = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let mut config = Config::default();
    config.security.root_path = Some(root.path().to_path_buf());

    let session = in_process_session(config).await;
    let reply = session
        .invoke(Action::BrowseFiles, outside.path().to_str().unwrap())
        .await
        .unwrap();

    assert!(reply.is_error);
    assert!(reply.text.starts_with("Path security validation failed"));

    session.close().await;
}

#[tokio::test]
async fn test_query_sample_catalogue() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let session = in_process_session(config).await;
    let reply = session
        .invoke(
            Action::QueryDb,
            "SELECT COUNT(*) AS total FROM \"Track\";",
        )
        .await
        .unwrap();

    assert!(!reply.is_error);
    let lines: Vec<_> = reply.text.lines().map(str::trim_end).collect();
    assert_eq!(lines, vec!["total", "-----", "8"]);

    session.close().await;
}

#[tokio::test]
async fn test_query_datetime_and_numeric_columns() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let session = in_process_session(config).await;
    let reply = session
        .invoke(
            Action::QueryDb,
            "SELECT \"InvoiceId\", \"InvoiceDate\", \"BillingCountry\", \"Total\" \
             FROM \"Invoice\" ORDER BY \"InvoiceId\"",
        )
        .await
        .unwrap();

    assert!(!reply.is_error, "{}", reply.text);
    let lines: Vec<_> = reply.text.lines().map(str::trim_end).collect();
    assert_eq!(
        lines,
        vec![
            "InvoiceId | InvoiceDate         | BillingCountry | Total",
            "----------+---------------------+----------------+------",
            "1         | 2009-01-01 00:00:00 | Germany        | 1.98",
            "2         | 2009-01-02 00:00:00 | Norway         | 3.96",
            "3         | 2009-01-03 00:00:00 | Belgium        | 5.94",
        ]
    );

    session.close().await;
}

#[tokio::test]
async fn test_select_star_on_invoice() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let session = in_process_session(config).await;
    let reply = session
        .invoke(Action::QueryDb, "SELECT * FROM Invoice")
        .await
        .unwrap();

    assert!(!reply.is_error, "{}", reply.text);
    assert_eq!(reply.text.lines().count(), 5);
    assert!(reply.text.contains("Stuttgart"));

    session.close().await;
}

#[tokio::test]
async fn test_unsupported_scheme_reported_by_query_tool() {
    let mut config = Config::default();
    config.database.url = Some("mysql://h/db".to_string());
    assert!(config.validate().is_ok());

    let session = in_process_session(config).await;
    let reply = session
        .invoke(Action::QueryDb, "SELECT 1")
        .await
        .unwrap();

    assert!(reply.is_error);
    assert_eq!(
        reply.text,
        "Failed to execute query: Unsupported DATABASE_URL scheme in 'mysql://h/db'."
    );

    let reply = session.invoke(Action::Hello, "Alice").await.unwrap();
    assert_eq!(reply.text, "Hello, Alice!");

    session.close().await;
}

#[tokio::test]
async fn test_query_join_with_nulls() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let session = in_process_session(config).await;
    session
        .invoke(
            Action::QueryDb,
            "INSERT INTO \"Artist\" (\"ArtistId\", \"Name\") VALUES (4, NULL)",
        )
        .await
        .unwrap();
    let reply = session
        .invoke(
            Action::QueryDb,
            "SELECT \"ArtistId\", \"Name\" FROM \"Artist\" WHERE \"ArtistId\" = 4",
        )
        .await
        .unwrap();

    let last = reply.text.lines().last().unwrap();
    assert!(last.contains("None"));

    session.close().await;
}

#[tokio::test]
async fn test_query_reports_rows_affected() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let session = in_process_session(config).await;
    let reply = session
        .invoke(
            Action::QueryDb,
            "UPDATE \"Track\" SET \"UnitPrice\" = 1.29 WHERE \"AlbumId\" = 3",
        )
        .await
        .unwrap();

    assert_eq!(reply.text, "Query executed successfully. Rows affected: 3");

    session.close().await;
}

#[tokio::test]
async fn test_invalid_sql_comes_back_as_text() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let session = in_process_session(config).await;
    let reply = session
        .invoke(Action::QueryDb, "SELEC nonsense")
        .await
        .unwrap();

    assert!(reply.is_error);
    assert!(reply.text.starts_with("Failed to execute query: "));

    session.close().await;
}

#[tokio::test]
async fn test_query_without_database() {
    let session = in_process_session(Config::default()).await;
    let reply = session
        .invoke(Action::QueryDb, "SELECT 1")
        .await
        .unwrap();

    assert!(reply.is_error);
    assert!(reply.text.contains("DATABASE_URL is not set"));

    session.close().await;
}

#[tokio::test]
async fn test_list_tables_tool() {
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(dir.path());
    load_sample_schema(&config).await;

    let session = in_process_session(config).await;
    let reply = session
        .call("list_tables", serde_json::Map::new())
        .await
        .unwrap();

    let lines: Vec<_> = reply.text.lines().map(str::trim_end).collect();
    assert_eq!(
        lines,
        vec!["name", "-------", "Album", "Artist", "Genre", "Invoice", "Track"]
    );

    session.close().await;
}
