use async_trait::async_trait;
use modelsearch_core::{
    config::DEFAULT_SEARCH_ENDPOINT, Query, SearchError, SearchResponse, SearchResult,
    StatusResponse,
};

/// One search round trip against the backend.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &Query) -> Result<Vec<SearchResult>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    base_url: String,
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_endpoint(base_url, DEFAULT_SEARCH_ENDPOINT)
    }

    pub fn with_endpoint(base_url: &str, endpoint: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the backend whether its Ollama server answers.
    pub async fn server_status(&self) -> Result<StatusResponse, SearchError> {
        let url = format!("{}/api/server/status", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SearchError::Status(resp.status().as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, query: &Query) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}{}", self.base_url, self.endpoint);
        tracing::debug!("Searching models for '{}'", query);

        let resp = self
            .client
            .post(&url)
            .json(&query.to_request())
            .send()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        SearchResponse::parse_body(status, &body)
    }
}
