//! Challenges HTTP server binary.
//!
//! Loads the service configuration, builds the router and serves it.
//!
//! # Environment Variables
//!
//! - `CHALLENGES_CONFIG`: Path to the YAML configuration (default: config/challenges.yaml)
//! - `HOST`: Server host, overrides the configuration file
//! - `PORT`: Server port, overrides the configuration file
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use whiteboard_challenges::api::{AppState, create_router};
use whiteboard_challenges::config::ConfigLoader;

const DEFAULT_CONFIG_PATH: &str = "config/challenges.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting challenges HTTP server");

    let config_path =
        env::var("CHALLENGES_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let port = match env::var("PORT") {
        Ok(port) => Some(port.parse::<u16>()?),
        Err(_) => None,
    };
    let config = ConfigLoader::load_or_default(&config_path)?
        .with_server(env::var("HOST").ok(), port);
    info!(
        config_path = %config_path,
        max_span_days = config.max_span_days(),
        max_active_games = config.mastermind().max_active_games,
        "Configuration loaded"
    );

    let addr: SocketAddr = format!("{}:{}", config.server().host, config.server().port).parse()?;

    // Create router with all endpoints
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
