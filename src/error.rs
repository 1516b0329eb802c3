use std::fmt;

#[derive(Debug)]
pub enum ChatError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    /// A session could not be established. Fatal to starting a conversation.
    SessionCreation(String),
    /// Prior history could not be loaded. Non-fatal; the log starts empty.
    HistoryFetch(String),
    /// The recommendation collaborator failed for one turn.
    Recommendation(String),
    /// A best-effort write to the backing store failed.
    Persistence(String),
    /// `submit` was called while a previous turn is still awaiting its response.
    TurnInProgress,
    EmptyQuery,
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ChatError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChatError::SessionCreation(msg) => write!(f, "Failed to create session: {}", msg),
            ChatError::HistoryFetch(msg) => write!(f, "Failed to fetch history: {}", msg),
            ChatError::Recommendation(msg) => write!(f, "Recommendation request failed: {}", msg),
            ChatError::Persistence(msg) => write!(f, "Failed to persist message: {}", msg),
            ChatError::TurnInProgress => {
                write!(f, "A request is already in flight for this session")
            }
            ChatError::EmptyQuery => write!(f, "Query must not be empty"),
            ChatError::NetworkError(e) => write!(f, "Network error: {}", e),
            ChatError::IoError(e) => write!(f, "IO error: {}", e),
            ChatError::JsonError(e) => write!(f, "JSON error: {}", e),
            ChatError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::NetworkError(e) => Some(e),
            ChatError::IoError(e) => Some(e),
            ChatError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::NetworkError(err)
    }
}

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        ChatError::IoError(err)
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::JsonError(err)
    }
}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::Other(err.to_string())
    }
}

impl From<String> for ChatError {
    fn from(msg: String) -> Self {
        ChatError::Other(msg)
    }
}

impl From<&str> for ChatError {
    fn from(msg: &str) -> Self {
        ChatError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
