use gloo_net::http::Request;
use modelsearch_core::{Query, SearchError, SearchResponse, SearchResult};

pub async fn search_models(endpoint: &str, query: &Query) -> Result<Vec<SearchResult>, SearchError> {
    let resp = Request::post(endpoint)
        .json(&query.to_request())
        .map_err(|e| SearchError::Http(e.to_string()))?
        .send()
        .await
        .map_err(|e| SearchError::Http(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| SearchError::Http(e.to_string()))?;

    SearchResponse::parse_body(status, &body)
}
