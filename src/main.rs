mod config;
mod routes;
mod services;
mod types;
mod utils;
use std::{error::Error, net::SocketAddr};
use tracing::{info, warn};
mod app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = config::Config::load()?;
    if config.api_key.is_none() {
        warn!("No Google Maps API key configured, nearby searches will fail");
    }

    let app = app::gen_app(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
