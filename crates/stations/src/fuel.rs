//! Fuel kinds and their wire tags.

use std::fmt;
use std::str::FromStr;

use crate::error::StationError;

/// The two fuels every station carries.
///
/// Wire tags keep the reference Italian names (`benzina`, `diesel`) for
/// client compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelKind {
    Gasoline,
    Diesel,
}

impl FuelKind {
    /// Wire tag for this fuel kind.
    pub fn tag(self) -> &'static str {
        match self {
            FuelKind::Gasoline => "benzina",
            FuelKind::Diesel => "diesel",
        }
    }
}

impl fmt::Display for FuelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FuelKind {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "benzina" => Ok(FuelKind::Gasoline),
            "diesel" => Ok(FuelKind::Diesel),
            other => Err(StationError::UnknownFuelKind(other.to_string())),
        }
    }
}
