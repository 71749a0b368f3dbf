//! Typed serialization shapes for the API boundary.
//!
//! Each view exposes a different field subset of a station; handlers encode
//! these to JSON, so the wire format is fixed by the struct definitions
//! rather than assembled ad hoc.

use serde::{Deserialize, Serialize};

use crate::error::StationError;
use crate::station::StationId;

/// Full-detail station representation, including computed fill percentages.
#[derive(Debug, Clone, Serialize)]
pub struct StationSummary {
    pub id: StationId,
    pub name: String,
    pub province: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub price_gasoline: f64,
    pub price_diesel: f64,
    pub level_gasoline: f64,
    pub capacity_gasoline: f64,
    pub percent_gasoline: f64,
    pub level_diesel: f64,
    pub capacity_diesel: f64,
    pub percent_diesel: f64,
}

/// Level/percentage view used by the levels endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct LevelsView {
    pub id: StationId,
    pub name: String,
    pub level_gasoline: f64,
    pub capacity_gasoline: f64,
    pub percent_gasoline: f64,
    pub level_diesel: f64,
    pub capacity_diesel: f64,
    pub percent_diesel: f64,
}

/// Reduced view for map display: identity, coordinates, prices.
#[derive(Debug, Clone, Serialize)]
pub struct MapEntry {
    pub id: StationId,
    pub name: String,
    pub province: String,
    pub lat: f64,
    pub lon: f64,
    pub price_gasoline: f64,
    pub price_diesel: f64,
}

/// A bulk price update: new prices for any subset of the two fuels.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceUpdate {
    pub gasoline: Option<f64>,
    pub diesel: Option<f64>,
}

impl PriceUpdate {
    /// True when no fuel price is present.
    pub fn is_empty(&self) -> bool {
        self.gasoline.is_none() && self.diesel.is_none()
    }

    /// Reject negative prices before any station is touched.
    pub fn validate(&self) -> Result<(), StationError> {
        for (tag, price) in [("benzina", self.gasoline), ("diesel", self.diesel)] {
            if let Some(p) = price {
                if p < 0.0 {
                    return Err(StationError::InvalidArgument(format!(
                        "negative price {p} for {tag}"
                    )));
                }
            }
        }
        Ok(())
    }
}
