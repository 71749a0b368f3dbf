//! The `/api/distributori` endpoints.
//!
//! # Endpoints
//!
//! - `GET /api/distributori` - full list, sorted by id
//! - `GET /api/distributori/provincia/{code}/livelli` - levels by province
//! - `GET /api/distributori/{id}/livelli` - levels for one station
//! - `GET /api/distributori/map` - reduced list for map display
//! - `PUT /api/distributori/provincia/{code}/prezzi` - bulk price update
//!
//! Handlers are thin: parse and validate, lock the registry once, call one
//! registry operation, encode the typed views to JSON. Wire names on the
//! update endpoint (`benzina`, `diesel`, `aggiornati`) are preserved from
//! the reference format for client compatibility.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use stations::{LevelsView, MapEntry, PriceUpdate, StationId, StationSummary};

use crate::error::{AppError, AppResult};
use crate::state::ServerState;

/// Bulk price update request body. At least one field must be present.
#[derive(Debug, Deserialize)]
pub struct BulkPriceRequest {
    /// New gasoline price, if changing.
    pub benzina: Option<f64>,
    /// New diesel price, if changing.
    pub diesel: Option<f64>,
}

impl BulkPriceRequest {
    fn into_update(self) -> PriceUpdate {
        PriceUpdate {
            gasoline: self.benzina,
            diesel: self.diesel,
        }
    }
}

/// Bulk price update response.
#[derive(Debug, Serialize)]
pub struct BulkPriceResponse {
    /// Ids of the stations that were updated.
    pub aggiornati: Vec<StationId>,
}

/// Full station list, sorted by id: `GET /api/distributori`
pub async fn list_stations(State(state): State<ServerState>) -> Json<Vec<StationSummary>> {
    let registry = state.registry.lock().await;
    Json(registry.list_all())
}

/// Levels for every station in a province: `GET /api/distributori/provincia/{code}/livelli`
///
/// An unknown province is an empty array, not an error.
pub async fn province_levels(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> Json<Vec<LevelsView>> {
    let registry = state.registry.lock().await;
    Json(registry.find_by_province(&code))
}

/// Levels for one station: `GET /api/distributori/{id}/livelli`
pub async fn station_levels(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<LevelsView>> {
    let registry = state.registry.lock().await;

    let station = registry
        .find_by_id(StationId(id))
        .ok_or_else(|| AppError::NotFound(format!("station {id} not found")))?;

    Ok(Json(station.to_levels_view()))
}

/// Reduced list for map display: `GET /api/distributori/map`
pub async fn map_view(State(state): State<ServerState>) -> Json<Vec<MapEntry>> {
    let registry = state.registry.lock().await;
    Json(registry.list_map_view())
}

/// Bulk price update for a province: `PUT /api/distributori/provincia/{code}/prezzi`
///
/// Body: `{"benzina": 1.95, "diesel": 1.85}` (one or both). Any body that
/// fails to parse (missing, non-JSON, non-numeric price) is a 400; the
/// update is fully validated before any station is mutated.
pub async fn update_province_prices(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    body: Result<Json<BulkPriceRequest>, JsonRejection>,
) -> AppResult<Json<BulkPriceResponse>> {
    let Json(request) = body.map_err(|e| AppError::BadRequest(format!("invalid JSON body: {e}")))?;

    let update = request.into_update();
    if update.is_empty() {
        return Err(AppError::BadRequest(
            "at least one of 'benzina' or 'diesel' is required".into(),
        ));
    }

    let mut registry = state.registry.lock().await;
    let aggiornati = registry.bulk_set_price(&code, &update)?;
    drop(registry);

    tracing::debug!(province = %code, updated = aggiornati.len(), "bulk price update");

    Ok(Json(BulkPriceResponse { aggiornati }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parsing() {
        let req: BulkPriceRequest = serde_json::from_str(r#"{"benzina": 1.77}"#).unwrap();
        assert_eq!(req.benzina, Some(1.77));
        assert_eq!(req.diesel, None);
    }

    #[test]
    fn test_request_rejects_non_numeric_price() {
        let result = serde_json::from_str::<BulkPriceRequest>(r#"{"benzina": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serialization() {
        let response = BulkPriceResponse {
            aggiornati: vec![StationId(1), StationId(2)],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"aggiornati":[1,2]}"#);
    }
}
