use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::warn;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const CACHE_TTL: Duration = Duration::from_secs(5);

/// Checks whether an Ollama server answers `/api/tags`, remembering the answer
/// per base URL for a few seconds.
pub struct StatusProbe {
    http: reqwest::Client,
    cache: DashMap<String, (Instant, bool)>,
}

impl StatusProbe {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            cache: DashMap::new(),
        }
    }

    pub async fn is_running(&self, base_url: &str) -> bool {
        if let Some(entry) = self.cache.get(base_url) {
            let (checked_at, running) = *entry;
            if checked_at.elapsed() < CACHE_TTL {
                return running;
            }
        }

        let running = self.probe(base_url).await;
        self.cache.retain(|_, (checked_at, _)| checked_at.elapsed() < CACHE_TTL);
        self.cache
            .insert(base_url.to_string(), (Instant::now(), running));
        running
    }

    async fn probe(&self, base_url: &str) -> bool {
        let url = format!("{}/api/tags", base_url);
        match self.http.get(&url).timeout(PROBE_TIMEOUT).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                warn!("Server check failed with error: {}", e);
                false
            }
        }
    }
}

impl Default for StatusProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn closed_port_url() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_unreachable_server_is_not_running() {
        let status = StatusProbe::new();
        let url = closed_port_url().await;

        assert!(!status.is_running(&url).await);
        assert_eq!(status.cache.len(), 1);
    }

    #[tokio::test]
    async fn test_expired_entries_evicted_on_insert() {
        let status = StatusProbe::new();
        let stale = Instant::now()
            .checked_sub(CACHE_TTL * 2)
            .unwrap();
        for i in 0..50 {
            status
                .cache
                .insert(format!("http://old-{}.invalid:11434", i), (stale, true));
        }

        let url = closed_port_url().await;
        assert!(!status.is_running(&url).await);

        assert_eq!(status.cache.len(), 1);
        assert!(status.cache.contains_key(&url));
    }

    #[tokio::test]
    async fn test_fresh_entry_served_from_cache() {
        let status = StatusProbe::new();
        let url = closed_port_url().await;
        status.cache.insert(url.clone(), (Instant::now(), true));

        assert!(status.is_running(&url).await);
    }
}
