use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use translate_proxy::{app, AppState, Config, DeploymentMode};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("translate_proxy=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load()?;
    if config.llm_config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; every translation request will fail until it is");
    }
    info!(
        "Default model: {}, allowed: {:?}",
        config.llm_config.default_model, config.llm_config.allowed_models
    );

    let mode = config.deployment_mode();
    let port = config.system_config.port;
    let host = match mode {
        DeploymentMode::Standalone => config.system_config.host.clone(),
        DeploymentMode::Serverless => "0.0.0.0".to_string(),
    };

    let app_state = AppState::new(config)?;
    let router = app(app_state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    match mode {
        DeploymentMode::Standalone => info!("Server http://{}", listener.local_addr()?),
        DeploymentMode::Serverless => info!("Serverless mode, listening on {}", listener.local_addr()?),
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
