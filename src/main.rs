//! fuelmap - fuel-station dashboard service
//!
//! Seeds the in-memory station registry and serves the HTTP/JSON API for
//! the map/dashboard client.

use clap::Parser;
use server::{create_app, ServerConfig, ServerState};
use stations::StationRegistry;

/// Fuel-station inventory and pricing API
#[derive(Parser, Debug)]
#[command(name = "fuelmap")]
#[command(about = "Serves fuel-station inventory and pricing data over HTTP")]
#[command(version)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "FUELMAP_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "FUELMAP_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let registry = StationRegistry::seed();
    tracing::info!(stations = registry.len(), "registry seeded");

    let state = ServerState::new(registry);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
