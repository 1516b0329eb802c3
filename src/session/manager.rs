use super::store::SessionStore;
use crate::api::HistoryMessage;
use crate::error::Result;
use crate::models::Session;
use std::sync::Arc;

/// Owns the one active session for a conversation view.
///
/// The session is set exactly once, at `start` or `attach`, and never
/// reassigned for the lifetime of the view.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    session: Session,
}

impl SessionManager {
    /// Establishes a fresh session for `user_id`. Fails with
    /// `ChatError::SessionCreation` if the store is unreachable; no message
    /// operation may proceed without a valid session.
    pub async fn start(store: Arc<dyn SessionStore>, user_id: &str) -> Result<Self> {
        let session = store.create_session(user_id).await?;
        Ok(Self { store, session })
    }

    /// Binds to a known session id without creating a new one.
    pub fn attach(store: Arc<dyn SessionStore>, session: Session) -> Self {
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Fetches prior history for the active session. A conversation with no
    /// history is an empty vector; a transport failure is
    /// `ChatError::HistoryFetch`, which callers treat as non-fatal.
    pub async fn resume(&self) -> Result<Vec<HistoryMessage>> {
        self.store.fetch_history(&self.session.id).await
    }
}
