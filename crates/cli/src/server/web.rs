use ferrous_dig_api::{create_api_routes, AppState};
use ferrous_dig_application::services::SlackBlockFormatter;
use ferrous_dig_domain::config::ServerConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::di::Services;

pub async fn start_web_server(config: &ServerConfig, services: &Services) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;

    let state = AppState {
        dig: Arc::new(services.dig_command(SlackBlockFormatter::new())),
    };
    let app = create_api_routes(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🌍 Web Server: http://{}", addr);
    info!("   Endpoints: POST /dig, POST /slack/dig, GET /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
