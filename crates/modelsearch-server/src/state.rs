use std::sync::Arc;

use modelsearch_core::ServerConfig;

use crate::services::library::{HttpLibrary, LibrarySource};
use crate::services::ollama::StatusProbe;

pub struct AppState {
    pub ollama_url: String,
    pub library: Arc<dyn LibrarySource>,
    pub status: StatusProbe,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_library(&config.ollama_url, Arc::new(HttpLibrary::new(&config.library_url)))
    }

    pub fn with_library(ollama_url: &str, library: Arc<dyn LibrarySource>) -> Self {
        Self {
            ollama_url: ollama_url.to_string(),
            library,
            status: StatusProbe::new(),
        }
    }
}
