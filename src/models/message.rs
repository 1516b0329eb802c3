use super::product::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Message payload. Plain text, or an ordered set of product results with an
/// optional human-readable summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MessageKind {
    Text {
        content: String,
    },
    ProductResults {
        results: Vec<Product>,
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
    },
}

/// One entry in a conversation log.
///
/// Ids are assigned by the owning log and increase monotonically, so sorting
/// by id always reproduces insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub timestamp: chrono::DateTime<chrono::Local>,
    #[serde(flatten)]
    pub kind: MessageKind,
    /// Transient placeholder awaiting resolution. Never persisted.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pending: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Message {
    pub fn text(id: u64, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            timestamp: chrono::Local::now(),
            kind: MessageKind::Text {
                content: content.into(),
            },
            pending: false,
        }
    }

    pub fn product_results(id: u64, results: Vec<Product>, summary: Option<String>) -> Self {
        Self {
            id,
            role: Role::Assistant,
            timestamp: chrono::Local::now(),
            kind: MessageKind::ProductResults { results, summary },
            pending: false,
        }
    }

    pub fn pending_placeholder(id: u64) -> Self {
        Self {
            id,
            role: Role::Assistant,
            timestamp: chrono::Local::now(),
            kind: MessageKind::Text {
                content: String::new(),
            },
            pending: true,
        }
    }

    /// Text content, if this is a text message.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Text { content } => Some(content),
            MessageKind::ProductResults { .. } => None,
        }
    }
}
