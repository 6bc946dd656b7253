//! Chat transcript persistence.
//!
//! A transcript is the ordered list of turns of one session, stored as a
//! single JSON document in `chat_threads.messages`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::any::install_default_drivers;
use sqlx::{AnyConnection, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use super::{DatabaseError, DatabaseUrl};

const CREATE_TABLE_SQL: &str = "\
CREATE TABLE IF NOT EXISTS chat_threads (
    session_id TEXT PRIMARY KEY,
    messages TEXT NOT NULL DEFAULT '[]',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

const UPSERT_SQL: &str = "\
INSERT INTO chat_threads (session_id, messages, created_at, updated_at)
VALUES ($1, $2, $3, $4)
ON CONFLICT (session_id)
DO UPDATE SET messages = excluded.messages, updated_at = excluded.updated_at";

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    /// Speaker, e.g. `user` or `assistant`.
    pub role: String,
    /// Message text.
    pub content: String,
}

impl TranscriptMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Stores transcripts in the configured database.
///
/// Every operation opens its own connection. Clones share one append lock,
/// so concurrent appends to a session from one process never drop turns.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    url: DatabaseUrl,
    append_lock: Arc<Mutex<()>>,
}

impl TranscriptStore {
    /// Open the store, creating the `chat_threads` table if needed.
    pub async fn connect(url: DatabaseUrl) -> Result<Self, DatabaseError> {
        let store = Self {
            url,
            append_lock: Arc::new(Mutex::new(())),
        };
        let mut conn = store.open().await?;
        sqlx::query(CREATE_TABLE_SQL).execute(&mut conn).await?;
        conn.close().await?;
        info!("Transcript store ready ({})", store.url.dialect());
        Ok(store)
    }

    /// A fresh random session identifier.
    pub fn new_session_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    /// Messages stored for a session; empty for unknown sessions.
    pub async fn load(&self, session_id: Uuid) -> Result<Vec<TranscriptMessage>, DatabaseError> {
        let mut conn = self.open().await?;
        let messages = read_messages(&mut conn, session_id).await?;
        conn.close().await?;
        debug!("Loaded {} messages for session {}", messages.len(), session_id);
        Ok(messages)
    }

    /// Replace the stored transcript of a session.
    pub async fn save(
        &self,
        session_id: Uuid,
        messages: &[TranscriptMessage],
    ) -> Result<(), DatabaseError> {
        let mut conn = self.open().await?;
        write_messages(&mut conn, session_id, messages).await?;
        conn.close().await?;
        Ok(())
    }

    /// Add messages to the end of a session's transcript.
    ///
    /// The read and the write run in one transaction.
    pub async fn append(
        &self,
        session_id: Uuid,
        messages: impl IntoIterator<Item = TranscriptMessage>,
    ) -> Result<Vec<TranscriptMessage>, DatabaseError> {
        let _guard = self.append_lock.lock().await;

        let mut conn = self.open().await?;
        let mut tx = conn.begin().await?;
        let mut transcript = read_messages(&mut tx, session_id).await?;
        transcript.extend(messages);
        write_messages(&mut tx, session_id, &transcript).await?;
        tx.commit().await?;
        conn.close().await?;

        Ok(transcript)
    }

    async fn open(&self) -> Result<AnyConnection, DatabaseError> {
        install_default_drivers();
        Ok(AnyConnection::connect(&self.url.connection_string()).await?)
    }
}

async fn read_messages(
    conn: &mut AnyConnection,
    session_id: Uuid,
) -> Result<Vec<TranscriptMessage>, DatabaseError> {
    let stored: Option<String> =
        sqlx::query_scalar("SELECT messages FROM chat_threads WHERE session_id = $1")
            .bind(session_id.to_string())
            .fetch_optional(&mut *conn)
            .await?;

    match stored {
        Some(document) => Ok(serde_json::from_str(&document)?),
        None => Ok(Vec::new()),
    }
}

async fn write_messages(
    conn: &mut AnyConnection,
    session_id: Uuid,
    messages: &[TranscriptMessage],
) -> Result<(), DatabaseError> {
    let document = serde_json::to_string(messages)?;
    let now = Utc::now().to_rfc3339();

    sqlx::query(UPSERT_SQL)
        .bind(session_id.to_string())
        .bind(document)
        .bind(now.clone())
        .bind(now)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
