//! Binary entry point: loads configuration and serves the HTTP API.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use roster_engine::api::{AppState, create_router};
use roster_engine::config::ConfigLoader;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("ROSTER_CONFIG_DIR").unwrap_or_else(|_| "./config/roster".to_string());
    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };
    info!(
        config_dir = %config_dir,
        shifts = config.catalog().shifts().len(),
        rules = config.rules().len(),
        "Configuration loaded"
    );

    let state = AppState::new(config);
    let router = create_router(state);

    let addr =
        std::env::var("ROSTER_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    info!(addr = %addr, "Roster engine listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
