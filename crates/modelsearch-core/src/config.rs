use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_SEARCH_ENDPOINT: &str = "/api/models/search";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_LIBRARY_URL: &str = "https://ollama.com/library";

/// Settings for the autocomplete widget, shared by the browser and native front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Quiet period after the last keystroke before a search fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Path of the search endpoint, relative to the backend base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub ollama_url: String,
    pub library_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            static_dir: "./dist".to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            library_url: DEFAULT_LIBRARY_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `PORT`, `STATIC_DIR`, `OLLAMA_SERVER_URL` and `OLLAMA_LIBRARY_URL`,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            ollama_url: std::env::var("OLLAMA_SERVER_URL")
                .map(|u| normalize_ollama_url(&u))
                .unwrap_or(defaults.ollama_url),
            library_url: std::env::var("OLLAMA_LIBRARY_URL").unwrap_or(defaults.library_url),
        }
    }
}

/// Strips a trailing slash and adds `http://` when the scheme is missing.
pub fn normalize_ollama_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http") {
        return trimmed.to_string();
    }
    format!("http://{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.endpoint, "/api/models/search");
    }

    #[test]
    fn test_widget_config_fills_missing_fields() {
        let config: WidgetConfig = serde_json::from_str(r#"{"debounce_ms": 150}"#).unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.endpoint, DEFAULT_SEARCH_ENDPOINT);
    }

    #[test]
    fn test_normalize_ollama_url() {
        assert_eq!(normalize_ollama_url("http://host:11434/"), "http://host:11434");
        assert_eq!(normalize_ollama_url("host:11434"), "http://host:11434");
        assert_eq!(normalize_ollama_url("https://ollama.local"), "https://ollama.local");
    }
}
