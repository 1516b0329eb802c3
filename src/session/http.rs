use super::store::SessionStore;
use crate::api::{
    ApiClient, CreateSessionRequest, CreateSessionResponse, HistoryMessage, PersistMessageRequest,
};
use crate::error::{ChatError, Result};
use crate::models::{Role, Session};
use async_trait::async_trait;

/// `SessionStore` backed by the assistant backend's HTTP endpoints.
pub struct HttpSessionStore {
    api: ApiClient,
}

impl HttpSessionStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SessionStore for HttpSessionStore {
    async fn create_session(&self, user_id: &str) -> Result<Session> {
        let request = CreateSessionRequest {
            user_id: user_id.to_string(),
        };
        let response: CreateSessionResponse = self
            .api
            .post("/session", &request)
            .await
            .map_err(|e| ChatError::SessionCreation(e.to_string()))?;
        Ok(Session::new(response.id, user_id))
    }

    async fn fetch_history(&self, session_id: &str) -> Result<Vec<HistoryMessage>> {
        self.api
            .get(&format!("/history/{}", session_id))
            .await
            .map_err(|e| ChatError::HistoryFetch(e.to_string()))
    }

    async fn persist_message(&self, session_id: &str, role: Role, content: &str) -> Result<()> {
        let request = PersistMessageRequest {
            session_id: session_id.to_string(),
            role,
            content: content.to_string(),
        };
        self.api
            .post_ack("/message", &request)
            .await
            .map_err(|e| ChatError::Persistence(e.to_string()))
    }
}
