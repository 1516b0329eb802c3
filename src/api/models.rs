//! Wire shapes for the assistant backend.
//!
//! Field names follow the backend as-is: session endpoints use camelCase
//! (`userId`, `sessionId`) while the recommendation endpoint uses snake_case
//! (`user_id`, `top_k`). Payloads are validated here, at the boundary, rather
//! than trusted by the core.

use crate::error::{ChatError, Result};
use crate::models::{Product, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionResponse {
    /// Store-assigned session id.
    #[serde(rename = "_id")]
    pub id: String,
}

/// A persisted message as returned by `GET /history/{sessionId}`.
///
/// The store keeps only role and text content; product payloads are never
/// persisted, so hydrated history is text-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl HistoryMessage {
    /// Maps the stored role onto the core's role enum. The original store
    /// wrote assistant entries under both "assistant" and "bot".
    pub fn role(&self) -> Option<Role> {
        match self.role.as_str() {
            "user" => Some(Role::User),
            "assistant" | "bot" => Some(Role::Assistant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersistMessageRequest {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub top_k: usize,
}

pub const DEFAULT_TOP_K: usize = 5;

impl RecommendRequest {
    pub fn new(query: &str, user_id: Option<&str>, top_k: usize) -> Result<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ChatError::EmptyQuery);
        }
        if top_k == 0 {
            return Err(ChatError::ConfigError(
                "top_k must be a positive integer".to_string(),
            ));
        }
        Ok(Self {
            query: query.to_string(),
            user_id: user_id.map(|u| u.to_string()),
            top_k,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub results: Vec<Product>,
    #[serde(default)]
    pub summary: Option<String>,
}
