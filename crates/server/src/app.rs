//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.

use std::time::Duration;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{health, stations};
use crate::state::ServerState;

/// Create the axum application with all routes.
pub fn create_app(state: ServerState) -> Router {
    // CORS layer for the map/dashboard frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        // Health endpoint
        .route("/health", get(health::health))
        // Stations API
        .route("/api/distributori", get(stations::list_stations))
        .route("/api/distributori/map", get(stations::map_view))
        .route(
            "/api/distributori/{id}/livelli",
            get(stations::station_levels),
        )
        .route(
            "/api/distributori/provincia/{code}/livelli",
            get(stations::province_levels),
        )
        .route(
            "/api/distributori/provincia/{code}/prezzi",
            put(stations::update_province_prices),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Server configuration.
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Host to bind to.
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".into(),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("FUELMAP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("FUELMAP_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        Self { port, host }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
