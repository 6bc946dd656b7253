//! One-shot statement execution.
//!
//! Each dialect runs on its own native driver so cells can be rendered from
//! the value types the database actually returns, whatever the declared
//! column types are.

use sqlx::postgres::{PgConnection, PgRow};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Column, Connection, Executor, Row, Statement, TypeInfo, ValueRef};
use tracing::{debug, instrument};

use super::{DatabaseError, DatabaseUrl, format_rows};

const NULL_CELL: &str = "None";

/// Execute one statement against a fresh connection and render the outcome.
///
/// The statement is prepared first. If it describes result columns, its
/// rows are fetched and rendered as a table; otherwise it is executed and
/// the number of affected rows is reported.
#[instrument(skip_all, fields(dialect = url.dialect()))]
pub async fn execute_sql(url: &DatabaseUrl, sql: &str) -> Result<String, DatabaseError> {
    match url {
        DatabaseUrl::Sqlite(_) => {
            let mut conn = SqliteConnection::connect(&url.connection_string()).await?;
            let output = run_sqlite(&mut conn, sql).await;
            let closed = conn.close().await;
            let output = output?;
            closed?;
            Ok(output)
        }
        DatabaseUrl::Postgres(_) => {
            let mut conn = PgConnection::connect(&url.connection_string()).await?;
            let output = run_postgres(&mut conn, sql).await;
            let closed = conn.close().await;
            let output = output?;
            closed?;
            Ok(output)
        }
    }
}

async fn run_sqlite(conn: &mut SqliteConnection, sql: &str) -> Result<String, DatabaseError> {
    let statement = (&mut *conn).prepare(sql).await?;
    if statement.columns().is_empty() {
        let result = statement.query().execute(&mut *conn).await?;
        return Ok(rows_affected(result.rows_affected()));
    }

    let headers = column_names(statement.columns());
    let rows = statement.query().fetch_all(&mut *conn).await?;
    debug!("Fetched {} rows", rows.len());
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| (0..row.len()).map(|idx| sqlite_cell(row, idx)).collect())
        .collect();
    Ok(format_rows(&headers, &cells))
}

async fn run_postgres(conn: &mut PgConnection, sql: &str) -> Result<String, DatabaseError> {
    let statement = (&mut *conn).prepare(sql).await?;
    if statement.columns().is_empty() {
        let result = statement.query().execute(&mut *conn).await?;
        return Ok(rows_affected(result.rows_affected()));
    }

    let headers = column_names(statement.columns());
    let rows = statement.query().fetch_all(&mut *conn).await?;
    debug!("Fetched {} rows", rows.len());
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| (0..row.len()).map(|idx| postgres_cell(row, idx)).collect())
        .collect();
    Ok(format_rows(&headers, &cells))
}

fn column_names<C: Column>(columns: &[C]) -> Vec<String> {
    columns.iter().map(|c| c.name().to_string()).collect()
}

fn rows_affected(count: u64) -> String {
    format!("Query executed successfully. Rows affected: {}", count)
}

/// Render a SQLite cell from its storage class.
///
/// SQLite reports the runtime type of each value, so a `DATETIME` column
/// holding text renders as text and a `NUMERIC` one holding a real renders
/// as a number.
fn sqlite_cell(row: &SqliteRow, idx: usize) -> String {
    let kind = match row.try_get_raw(idx) {
        Ok(raw) if raw.is_null() => return NULL_CELL.to_string(),
        Ok(raw) => raw.type_info().name().to_string(),
        Err(e) => return format!("<{}>", e),
    };

    let rendered = match kind.as_str() {
        "INTEGER" => row.try_get_unchecked::<i64, _>(idx).map(|v| v.to_string()),
        "REAL" => row.try_get_unchecked::<f64, _>(idx).map(render_float),
        "BLOB" => row
            .try_get_unchecked::<Vec<u8>, _>(idx)
            .map(|v| format!("<{} bytes>", v.len())),
        _ => row.try_get_unchecked::<String, _>(idx),
    };
    rendered.unwrap_or_else(|e| format!("<{}>", e))
}

/// Render a PostgreSQL cell from its column type.
fn postgres_cell(row: &PgRow, idx: usize) -> String {
    let kind = match row.try_get_raw(idx) {
        Ok(raw) if raw.is_null() => return NULL_CELL.to_string(),
        Ok(raw) => raw.type_info().name().to_string(),
        Err(e) => return format!("<{}>", e),
    };

    let rendered = match kind.as_str() {
        "INT2" => row.try_get::<i16, _>(idx).map(|v| v.to_string()),
        "INT4" => row.try_get::<i32, _>(idx).map(|v| v.to_string()),
        "INT8" => row.try_get::<i64, _>(idx).map(|v| v.to_string()),
        "FLOAT4" => row.try_get::<f32, _>(idx).map(|v| render_float(f64::from(v))),
        "FLOAT8" => row.try_get::<f64, _>(idx).map(render_float),
        "BOOL" => row.try_get::<bool, _>(idx).map(|v| v.to_string()),
        "BYTEA" => row
            .try_get::<Vec<u8>, _>(idx)
            .map(|v| format!("<{} bytes>", v.len())),
        "TIMESTAMP" => row
            .try_get::<chrono::NaiveDateTime, _>(idx)
            .map(|v| v.to_string()),
        "TIMESTAMPTZ" => row
            .try_get::<chrono::DateTime<chrono::Utc>, _>(idx)
            .map(|v| v.to_string()),
        "DATE" => row.try_get::<chrono::NaiveDate, _>(idx).map(|v| v.to_string()),
        "TIME" => row.try_get::<chrono::NaiveTime, _>(idx).map(|v| v.to_string()),
        "UUID" => row.try_get::<uuid::Uuid, _>(idx).map(|v| v.to_string()),
        "JSON" | "JSONB" => row
            .try_get::<serde_json::Value, _>(idx)
            .map(|v| v.to_string()),
        _ => row.try_get::<String, _>(idx),
    };
    rendered.unwrap_or_else(|_| format!("<{}>", kind))
}

/// Floats keep a fractional part so `2.0` does not read as an integer.
fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
