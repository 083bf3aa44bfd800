use thiserror::Error;

/// Failure of a single search round trip.
///
/// Callers treat every variant the same way: the failure is logged and the
/// results list is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Search endpoint returned status {0}")]
    Status(u16),

    #[error("Failed to parse search response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
