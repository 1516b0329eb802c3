pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{
    CreateSessionRequest, CreateSessionResponse, HistoryMessage, PersistMessageRequest,
    RecommendRequest, RecommendResponse,
};
