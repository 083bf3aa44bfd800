mod error;
mod handlers;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use anyhow::Result;
use modelsearch_core::ServerConfig;
use tower_http::services::ServeDir;
use tracing::info;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::new(&config));

    let app = routes::api_router(state).fallback_service(ServeDir::new(&config.static_dir));

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Server listening on {}", addr);
    info!("Using Ollama server URL: {}", config.ollama_url);
    info!("Serving static files from {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
