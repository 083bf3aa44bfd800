use std::sync::LazyLock;

use async_trait::async_trait;
use modelsearch_core::SearchResult;
use regex::Regex;
use tracing::info;

use crate::error::AppError;

static SPAN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<span>(.*?)</span>").expect("span pattern compiles"));

/// Where the public model catalogue page comes from.
#[async_trait]
pub trait LibrarySource: Send + Sync {
    async fn fetch_page(&self) -> Result<String, AppError>;
}

pub struct HttpLibrary {
    url: String,
    http: reqwest::Client,
}

impl HttpLibrary {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LibrarySource for HttpLibrary {
    async fn fetch_page(&self) -> Result<String, AppError> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to reach the Ollama library: {}", e)))?;

        if !resp.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Ollama library returned {}",
                resp.status()
            )));
        }

        resp.text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read the Ollama library: {}", e)))
    }
}

/// Model names on the library page, in page order.
pub fn extract_model_names(page: &str) -> Vec<String> {
    SPAN_TEXT
        .captures_iter(page)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// Case-insensitive substring match; an empty keyword keeps everything.
pub fn filter_models(names: Vec<String>, keyword: &str) -> Vec<SearchResult> {
    let needle = keyword.to_lowercase();
    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(SearchResult::library_match)
        .collect()
}

pub async fn search(source: &dyn LibrarySource, keyword: &str) -> Result<Vec<SearchResult>, AppError> {
    let page = source.fetch_page().await?;
    let models = filter_models(extract_model_names(&page), keyword);
    info!("Library search '{}' matched {} models", keyword, models.len());
    Ok(models)
}
