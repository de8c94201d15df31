use clap::Parser;
use ping_service::{
    cli::Cli, metrics::LoggingMetrics, pong::build_client, routes::create_router,
    state::AppState,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "ping_service=info".into()),
        )
        .init();

    let config = Cli::parse().into_config()?;
    let pong_url = config.pong_url();

    let app_state = AppState {
        pong_client: Arc::new(build_client(config.request_timeout)?),
        pong_url: pong_url.as_str().into(),
        max_retries: config.max_retries,
        metrics: Arc::new(LoggingMetrics),
    };

    let listener = TcpListener::bind(config.listen_addr()).await?;

    info!("Ping service is up and listening on port {}", config.listen_port);
    info!("Pong service assumed to be reachable at {}", pong_url);

    axum::serve(listener, create_router(app_state)).await?;

    Ok(())
}
