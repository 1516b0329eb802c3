use crate::api::HistoryMessage;
use crate::error::Result;
use crate::models::{Role, Session};
use async_trait::async_trait;

/// Remote store for sessions and persisted messages.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a new session owned by `user_id`.
    async fn create_session(&self, user_id: &str) -> Result<Session>;

    /// Fetch prior history for a session. An empty conversation yields an
    /// empty vector, not an error.
    async fn fetch_history(&self, session_id: &str) -> Result<Vec<HistoryMessage>>;

    /// Persist one message. Best-effort; the ack is ignored.
    async fn persist_message(&self, session_id: &str, role: Role, content: &str) -> Result<()>;
}
