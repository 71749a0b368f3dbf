//! Capacity-bounded fluid-level accumulator.

use crate::error::StationError;

/// One fuel tank at one station.
///
/// Invariant: `0 <= level <= capacity` at all times; capacity is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    capacity: f64,
    level: f64,
}

impl Tank {
    /// Create a tank with the given capacity and initial level.
    ///
    /// The initial level is clamped into `[0, capacity]` so a seed can never
    /// start outside the invariant.
    pub fn new(capacity: f64, level: f64) -> Self {
        let capacity = capacity.max(0.0);
        Self {
            capacity,
            level: level.clamp(0.0, capacity),
        }
    }

    /// Current level in litres.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Maximum capacity in litres.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Add fuel to the tank.
    ///
    /// Excess beyond capacity is silently discarded (clamped, not an error).
    /// Fails with `InvalidArgument` for negative amounts.
    pub fn add(&mut self, amount: f64) -> Result<(), StationError> {
        if amount < 0.0 {
            return Err(StationError::InvalidArgument(format!(
                "cannot add negative amount {amount}"
            )));
        }
        self.level = (self.level + amount).min(self.capacity);
        Ok(())
    }

    /// Withdraw fuel from the tank.
    ///
    /// Fails with `InvalidArgument` for negative amounts and with
    /// `InsufficientLevel` when the request exceeds the current level; the
    /// level is unchanged on failure.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), StationError> {
        if amount < 0.0 {
            return Err(StationError::InvalidArgument(format!(
                "cannot withdraw negative amount {amount}"
            )));
        }
        if amount > self.level {
            return Err(StationError::InsufficientLevel {
                requested: amount,
                available: self.level,
            });
        }
        self.level -= amount;
        Ok(())
    }

    /// Fill percentage in `[0, 100]`.
    ///
    /// A zero-capacity tank reports `0.0` rather than dividing by zero.
    pub fn percent_full(&self) -> f64 {
        if self.capacity == 0.0 {
            return 0.0;
        }
        100.0 * self.level / self.capacity
    }
}
