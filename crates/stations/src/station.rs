//! A fuel outlet: identity, location, two tanks, two prices.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StationError;
use crate::fuel::FuelKind;
use crate::tank::Tank;
use crate::views::{LevelsView, MapEntry, StationSummary};

/// Unique identifier for stations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

/// One station on the network.
///
/// The station exclusively owns its two tanks; invariants: `id` is immutable
/// and both prices stay non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    name: String,
    province: String,
    address: String,
    lat: f64,
    lon: f64,
    gasoline: Tank,
    diesel: Tank,
    price_gasoline: f64,
    price_diesel: f64,
}

impl Station {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        province: impl Into<String>,
        address: impl Into<String>,
        lat: f64,
        lon: f64,
        gasoline: Tank,
        diesel: Tank,
        price_gasoline: f64,
        price_diesel: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            province: province.into(),
            address: address.into(),
            lat,
            lon,
            gasoline,
            diesel,
            price_gasoline: price_gasoline.max(0.0),
            price_diesel: price_diesel.max(0.0),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    /// Tank for the given fuel kind.
    pub fn tank(&self, kind: FuelKind) -> &Tank {
        match kind {
            FuelKind::Gasoline => &self.gasoline,
            FuelKind::Diesel => &self.diesel,
        }
    }

    /// Current price for the given fuel kind.
    pub fn price(&self, kind: FuelKind) -> f64 {
        match kind {
            FuelKind::Gasoline => self.price_gasoline,
            FuelKind::Diesel => self.price_diesel,
        }
    }

    /// Set the price for one fuel kind.
    ///
    /// Fails with `InvalidArgument` for negative prices; the current price is
    /// unchanged on failure.
    pub fn set_price(&mut self, kind: FuelKind, new_price: f64) -> Result<(), StationError> {
        if new_price < 0.0 {
            return Err(StationError::InvalidArgument(format!(
                "negative price {new_price} for {kind}"
            )));
        }
        match kind {
            FuelKind::Gasoline => self.price_gasoline = new_price,
            FuelKind::Diesel => self.price_diesel = new_price,
        }
        Ok(())
    }

    /// Case-insensitive exact match on the province code.
    pub fn matches_province(&self, code: &str) -> bool {
        self.province.eq_ignore_ascii_case(code)
    }

    /// Full-detail representation for the listing endpoint.
    pub fn to_summary(&self) -> StationSummary {
        StationSummary {
            id: self.id,
            name: self.name.clone(),
            province: self.province.clone(),
            address: self.address.clone(),
            lat: self.lat,
            lon: self.lon,
            price_gasoline: self.price_gasoline,
            price_diesel: self.price_diesel,
            level_gasoline: self.gasoline.level(),
            capacity_gasoline: self.gasoline.capacity(),
            percent_gasoline: self.gasoline.percent_full(),
            level_diesel: self.diesel.level(),
            capacity_diesel: self.diesel.capacity(),
            percent_diesel: self.diesel.percent_full(),
        }
    }

    /// Reduced representation for map display. No tank data.
    pub fn to_map_entry(&self) -> MapEntry {
        MapEntry {
            id: self.id,
            name: self.name.clone(),
            province: self.province.clone(),
            lat: self.lat,
            lon: self.lon,
            price_gasoline: self.price_gasoline,
            price_diesel: self.price_diesel,
        }
    }

    /// Level/percentage-focused representation for the levels endpoints.
    pub fn to_levels_view(&self) -> LevelsView {
        LevelsView {
            id: self.id,
            name: self.name.clone(),
            level_gasoline: self.gasoline.level(),
            capacity_gasoline: self.gasoline.capacity(),
            percent_gasoline: self.gasoline.percent_full(),
            level_diesel: self.diesel.level(),
            capacity_diesel: self.diesel.capacity(),
            percent_diesel: self.diesel.percent_full(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station() -> Station {
        Station::new(
            StationId(1),
            "IPERSTAR Ovest",
            "MI",
            "Via Roma 10, Milano",
            45.4642,
            9.1900,
            Tank::new(10_000.0, 7_000.0),
            Tank::new(12_000.0, 9_000.0),
            1.90,
            1.80,
        )
    }

    #[test]
    fn test_set_price_updates_matching_fuel() {
        let mut s = station();
        s.set_price(FuelKind::Gasoline, 1.77).unwrap();
        assert_eq!(s.price(FuelKind::Gasoline), 1.77);
        assert_eq!(s.price(FuelKind::Diesel), 1.80);
    }

    #[test]
    fn test_set_price_negative_rejected() {
        let mut s = station();
        let err = s.set_price(FuelKind::Gasoline, -1.0).unwrap_err();
        assert!(matches!(err, StationError::InvalidArgument(_)));
        assert_eq!(s.price(FuelKind::Gasoline), 1.90);
    }

    #[test]
    fn test_matches_province_case_insensitive() {
        let s = station();
        assert!(s.matches_province("mi"));
        assert!(s.matches_province("MI"));
        assert!(!s.matches_province("TO"));
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_string(&station().to_summary()).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"province\":\"MI\""));
        assert!(json.contains("\"percent_gasoline\":70.0"));
        assert!(json.contains("\"capacity_diesel\":12000.0"));
    }

    #[test]
    fn test_map_entry_excludes_tank_data() {
        let json = serde_json::to_string(&station().to_map_entry()).unwrap();
        assert!(json.contains("\"lat\":45.4642"));
        assert!(!json.contains("level_gasoline"));
        assert!(!json.contains("capacity_diesel"));
    }
}
