//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::ServerState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: &'static str,
    /// Number of stations in the registry.
    pub stations: usize,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
}

/// Liveness probe: `GET /health`
///
/// Returns 200 if the server is running.
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let stations = state.registry.lock().await.len();

    Json(HealthResponse {
        status: "healthy",
        stations,
        uptime_secs: state.uptime_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            stations: 3,
            uptime_secs: 60,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"stations\":3"));
    }
}
