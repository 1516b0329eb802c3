use crate::api::{ApiClient, RecommendRequest, RecommendResponse};
use crate::error::{ChatError, Result};
use async_trait::async_trait;

/// The external service that maps a query to ranked products.
///
/// The core performs no retries; any retry policy belongs to the transport
/// behind this trait.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse>;
}

/// `RecommendationClient` backed by the backend's `/recommend` endpoint.
pub struct HttpRecommendationClient {
    api: ApiClient,
}

impl HttpRecommendationClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RecommendationClient for HttpRecommendationClient {
    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse> {
        self.api
            .post("/recommend", request)
            .await
            .map_err(|e| ChatError::Recommendation(e.to_string()))
    }
}
