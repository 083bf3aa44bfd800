use std::fmt;

use crate::SearchRequest;

/// Trimmed, non-empty content of the search field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(self.0.clone())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let query = Query::parse("  llama 3 \n").unwrap();
        assert_eq!(query.as_str(), "llama 3");
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("   \t").is_none());
    }

    #[test]
    fn test_to_request() {
        let query = Query::parse(" mistral ").unwrap();
        assert_eq!(query.to_request(), SearchRequest::new("mistral"));
    }
}
