use serde::{Deserialize, Serialize};

use crate::SearchError;

const BODY_EXCERPT_CHARS: usize = 200;

/// Size tags the backend attaches to every library match.
pub const SIZE_TAGS: [&str; 10] = [
    "1b", "1.5b", "2b", "3b", "7b", "8b", "9b", "13b", "34b", "70b",
];

/// Body of `POST /api/models/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keyword: String,
}

impl SearchRequest {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<SearchResult>>,
}

impl SearchResponse {
    pub fn new(models: Vec<SearchResult>) -> Self {
        Self {
            models: Some(models),
        }
    }

    /// Results in server order; an absent list reads as empty.
    pub fn into_models(self) -> Vec<SearchResult> {
        self.models.unwrap_or_default()
    }

    /// Reads a search reply body. Any JSON object counts whatever the status,
    /// so the backend's `{"error": ...}` replies come back as no results.
    /// `Status` is kept for failed replies whose body is not JSON.
    pub fn parse_body(status: u16, body: &str) -> Result<Vec<SearchResult>, SearchError> {
        match serde_json::from_str::<SearchResponse>(body) {
            Ok(parsed) => Ok(parsed.into_models()),
            Err(_) if !(200..300).contains(&status) => Err(SearchError::Status(status)),
            Err(e) => Err(SearchError::Parse(format!(
                "{} - Body: {}",
                e,
                body_excerpt(body)
            ))),
        }
    }
}

fn body_excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

/// One candidate model. `name` doubles as display title and selection value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SearchResult {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A library match as the backend reports it: the name plus the standard size tags.
    pub fn library_match(name: impl Into<String>) -> Self {
        Self {
            tags: SIZE_TAGS.iter().map(|t| t.to_string()).collect(),
            ..Self::named(name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Running,
    Stopped,
}

/// Body of `GET /api/server/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: ServerStatus,
}

/// Body of `GET /api/server/url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUrlResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SearchRequest::new("llama")).unwrap();
        assert_eq!(body, serde_json::json!({ "keyword": "llama" }));
    }

    #[test]
    fn test_absent_models_reads_as_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.models.is_none());
        assert!(resp.into_models().is_empty());
    }

    #[test]
    fn test_optional_fields_default() {
        let resp: SearchResponse =
            serde_json::from_str(r#"{"models":[{"name":"llama3","family":"llama"}]}"#).unwrap();
        let models = resp.into_models();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "llama3");
        assert_eq!(models[0].family.as_deref(), Some("llama"));
        assert!(models[0].description.is_none());
        assert!(models[0].tags.is_empty());
    }

    #[test]
    fn test_parse_body_error_reply_reads_as_empty() {
        let body = r#"{"error":"Erreur de connexion","status":"error"}"#;
        assert_eq!(SearchResponse::parse_body(500, body), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_body_failed_status_without_json() {
        assert_eq!(
            SearchResponse::parse_body(502, "Bad Gateway"),
            Err(SearchError::Status(502))
        );
    }

    #[test]
    fn test_parse_body_excerpt_respects_char_boundaries() {
        let body = format!("a{}", "é".repeat(300));
        let Err(SearchError::Parse(msg)) = SearchResponse::parse_body(200, &body) else {
            panic!("expected a parse error");
        };
        assert!(msg.ends_with(&format!("a{}", "é".repeat(199))));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let body = serde_json::to_string(&StatusResponse {
            status: ServerStatus::Running,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"running"}"#);
    }

    #[test]
    fn test_library_match_carries_size_tags() {
        let result = SearchResult::library_match("qwen2");
        assert_eq!(result.tags.len(), SIZE_TAGS.len());
        assert_eq!(result.tags[0], "1b");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("description").is_none());
    }
}
