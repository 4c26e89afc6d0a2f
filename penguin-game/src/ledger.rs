//! Resource ledger: distance (spendable), energy (bounded), points (spawn counter).
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::numbers::{percent_of, u64_to_f64};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceLedger {
    distance_traveled: f64,
    points_collected: f64,
    energy: f64,
    max_energy: f64,
}

impl ResourceLedger {
    /// A fresh ledger with full energy.
    #[must_use]
    pub fn new(max_energy: f64) -> Self {
        let max_energy = max_energy.max(0.0);
        Self {
            distance_traveled: 0.0,
            points_collected: 0.0,
            energy: max_energy,
            max_energy,
        }
    }

    #[must_use]
    pub const fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    #[must_use]
    pub const fn points_collected(&self) -> f64 {
        self.points_collected
    }

    #[must_use]
    pub const fn energy(&self) -> f64 {
        self.energy
    }

    #[must_use]
    pub const fn max_energy(&self) -> f64 {
        self.max_energy
    }

    #[must_use]
    pub fn energy_pct(&self) -> f64 {
        percent_of(self.energy, self.max_energy)
    }

    #[must_use]
    pub fn has_energy(&self) -> bool {
        self.energy > 0.0
    }

    /// Credit production to both the spendable balance and the spawn counter.
    pub fn apply_production(&mut self, amount: f64) {
        if amount <= 0.0 || !amount.is_finite() {
            return;
        }
        self.distance_traveled += amount;
        self.points_collected += amount;
    }

    /// Drain energy, never below zero.
    pub fn spend_energy(&mut self, amount: f64) {
        self.energy = (self.energy - amount.max(0.0)).max(0.0);
    }

    /// Restore energy, never above the maximum.
    pub fn regen_energy(&mut self, amount: f64) {
        self.energy = (self.energy + amount.max(0.0)).min(self.max_energy);
    }

    pub fn refill_energy(&mut self) {
        self.energy = self.max_energy;
    }

    /// Deduct `amount` from the spendable balance. Points are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientFunds`] without deducting anything when the
    /// balance is short.
    pub fn spend(&mut self, amount: u64) -> Result<(), GameError> {
        let cost = u64_to_f64(amount);
        if self.distance_traveled < cost {
            return Err(GameError::InsufficientFunds {
                cost: amount,
                available: self.distance_traveled,
            });
        }
        self.distance_traveled -= cost;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) const fn set_energy_for_test(&mut self, energy: f64) {
        self.energy = energy;
    }
}
