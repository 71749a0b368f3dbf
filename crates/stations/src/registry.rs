//! The station registry: the sole shared mutable resource of the service.
//!
//! An ordered sequence of stations in seed order, keyed by unique id. The
//! registry owns its data and exposes synchronous methods; the server crate
//! wraps one instance in a single mutex and passes it to handlers, so tests
//! can build fresh registries without ambient global state.

use crate::error::StationError;
use crate::fuel::FuelKind;
use crate::station::{Station, StationId};
use crate::tank::Tank;
use crate::views::{LevelsView, MapEntry, PriceUpdate, StationSummary};

/// In-memory ordered collection of all stations.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    /// Build a registry from a seed set, checking id uniqueness.
    pub fn new(stations: Vec<Station>) -> Result<Self, StationError> {
        let mut ids: Vec<StationId> = stations.iter().map(|s| s.id()).collect();
        ids.sort();
        if let Some(dup) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(StationError::InvalidArgument(format!(
                "duplicate station id {}",
                dup[0]
            )));
        }
        Ok(Self { stations })
    }

    /// The 3-station reference deployment.
    pub fn seed() -> Self {
        Self {
            stations: vec![
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
                ),
                Station::new(
                    StationId(2),
                    "IPERSTAR Sud",
                    "MI",
                    "Piazza Duomo 1, Milano",
                    45.4643,
                    9.1910,
                    Tank::new(8_000.0, 2_000.0),
                    Tank::new(10_000.0, 4_000.0),
                    1.92,
                    1.82,
                ),
                Station::new(
                    StationId(3),
                    "IPERSTAR Nord",
                    "TO",
                    "Corso Francia 2, Torino",
                    45.0703,
                    7.6869,
                    Tank::new(9_000.0, 9_000.0),
                    Tank::new(11_000.0, 5_000.0),
                    1.95,
                    1.85,
                ),
            ],
        }
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations sorted ascending by id, as full summaries.
    pub fn list_all(&self) -> Vec<StationSummary> {
        let mut summaries: Vec<StationSummary> =
            self.stations.iter().map(Station::to_summary).collect();
        summaries.sort_by_key(|s| s.id);
        summaries
    }

    /// Look up a station by id.
    pub fn find_by_id(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id() == id)
    }

    /// Level views for every station in the given province, in seed order.
    ///
    /// The match is case-insensitive; no match yields an empty vector.
    pub fn find_by_province(&self, code: &str) -> Vec<LevelsView> {
        self.stations
            .iter()
            .filter(|s| s.matches_province(code))
            .map(Station::to_levels_view)
            .collect()
    }

    /// Map entries for every station, in seed order.
    pub fn list_map_view(&self) -> Vec<MapEntry> {
        self.stations.iter().map(Station::to_map_entry).collect()
    }

    /// Apply a price update to every station in the given province.
    ///
    /// The whole update is validated before any station is touched, so a bad
    /// price can never leave the batch half-applied. Returns the ids of the
    /// updated stations; no matching station is not an error.
    pub fn bulk_set_price(
        &mut self,
        province: &str,
        update: &PriceUpdate,
    ) -> Result<Vec<StationId>, StationError> {
        update.validate()?;

        let mut updated = Vec::new();
        for station in self.stations.iter_mut().filter(|s| s.matches_province(province)) {
            if let Some(price) = update.gasoline {
                station.set_price(FuelKind::Gasoline, price)?;
            }
            if let Some(price) = update.diesel {
                station.set_price(FuelKind::Diesel, price)?;
            }
            updated.push(station.id());
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_station(id: u64, province: &str) -> Station {
        Station::new(
            StationId(id),
            format!("Station {id}"),
            province,
            "Somewhere 1",
            45.0,
            9.0,
            Tank::new(1_000.0, 500.0),
            Tank::new(1_000.0, 500.0),
            1.90,
            1.80,
        )
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = StationRegistry::new(vec![tiny_station(1, "MI"), tiny_station(1, "TO")])
            .unwrap_err();
        assert!(matches!(err, StationError::InvalidArgument(_)));
    }

    #[test]
    fn test_list_all_sorted_by_id() {
        let registry = StationRegistry::new(vec![
            tiny_station(3, "MI"),
            tiny_station(1, "TO"),
            tiny_station(2, "MI"),
        ])
        .unwrap();

        let ids: Vec<u64> = registry.list_all().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_find_by_id() {
        let registry = StationRegistry::seed();
        assert!(registry.find_by_id(StationId(1)).is_some());
        assert!(registry.find_by_id(StationId(999)).is_none());
    }

    #[test]
    fn test_find_by_province_case_insensitive() {
        let registry = StationRegistry::seed();
        assert_eq!(registry.find_by_province("mi").len(), 2);
        assert_eq!(registry.find_by_province("MI").len(), 2);
        assert!(registry.find_by_province("XX").is_empty());
    }

    #[test]
    fn test_find_by_province_preserves_seed_order() {
        let registry = StationRegistry::new(vec![
            tiny_station(5, "MI"),
            tiny_station(2, "MI"),
            tiny_station(9, "TO"),
        ])
        .unwrap();

        let ids: Vec<u64> = registry
            .find_by_province("MI")
            .iter()
            .map(|v| v.id.0)
            .collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn test_map_view_covers_all_stations() {
        let registry = StationRegistry::seed();
        assert_eq!(registry.list_map_view().len(), 3);
    }

    #[test]
    fn test_bulk_set_price_updates_matching_province() {
        let mut registry = StationRegistry::seed();
        let update = PriceUpdate {
            gasoline: Some(1.77),
            diesel: Some(1.66),
        };

        let updated = registry.bulk_set_price("MI", &update).unwrap();
        assert_eq!(updated, vec![StationId(1), StationId(2)]);

        for id in [1, 2] {
            let station = registry.find_by_id(StationId(id)).unwrap();
            assert_eq!(station.price(FuelKind::Gasoline), 1.77);
            assert_eq!(station.price(FuelKind::Diesel), 1.66);
        }
        // TO station untouched
        let nord = registry.find_by_id(StationId(3)).unwrap();
        assert_eq!(nord.price(FuelKind::Gasoline), 1.95);
    }

    #[test]
    fn test_bulk_set_price_partial_update() {
        let mut registry = StationRegistry::seed();
        let update = PriceUpdate {
            gasoline: None,
            diesel: Some(1.70),
        };

        registry.bulk_set_price("TO", &update).unwrap();
        let nord = registry.find_by_id(StationId(3)).unwrap();
        assert_eq!(nord.price(FuelKind::Gasoline), 1.95);
        assert_eq!(nord.price(FuelKind::Diesel), 1.70);
    }

    #[test]
    fn test_bulk_set_price_no_match_is_empty_not_error() {
        let mut registry = StationRegistry::seed();
        let update = PriceUpdate {
            gasoline: Some(1.50),
            diesel: None,
        };
        assert_eq!(registry.bulk_set_price("XX", &update).unwrap(), vec![]);
    }

    #[test]
    fn test_bulk_set_price_negative_mutates_nothing() {
        let mut registry = StationRegistry::seed();
        let update = PriceUpdate {
            gasoline: Some(1.50),
            diesel: Some(-1.0),
        };

        let err = registry.bulk_set_price("MI", &update).unwrap_err();
        assert!(matches!(err, StationError::InvalidArgument(_)));

        // Validation runs before the loop: no station saw the valid price.
        let ovest = registry.find_by_id(StationId(1)).unwrap();
        assert_eq!(ovest.price(FuelKind::Gasoline), 1.90);
        assert_eq!(ovest.price(FuelKind::Diesel), 1.80);
    }
}
