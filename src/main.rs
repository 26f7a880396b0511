mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{ApiKey, Config};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hindi_translator=debug,tower_http=debug")),
        )
        .init();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "conf.yaml".to_string());
    let config = Config::load_or_default(&config_path)?;
    info!("Loaded configuration from: {}", config_path);

    let api_key = ApiKey::from_env()?;
    let addr = format!("{}:{}", config.system_config.host, config.system_config.port);

    let app = routes::create_app(AppState::new(config, api_key));

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
