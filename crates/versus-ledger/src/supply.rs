//! Token supply conservation checker.
//!
//! Invariant checked after settlement cycles and in tests:
//! ```text
//! Σ(account balances) + Σ(escrowed stakes) == seeds + loads - withdrawals
//! ```
//! Wager settlement only moves tokens between balances and escrow; the only
//! operations that change total supply are approved funding requests and
//! account opening balances.

use versus_types::{Result, VersusError};

/// Tracks expected total supply from the three movements that may change it.
#[derive(Debug, Default)]
pub struct SupplyTracker {
    /// Opening balances granted at account creation.
    seeds: u64,
    /// Approved load requests since genesis.
    loads: u64,
    /// Approved withdraw requests since genesis.
    withdrawals: u64,
}

impl SupplyTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_seed(&mut self, amount: u64) {
        self.seeds += amount;
    }

    pub fn record_load(&mut self, amount: u64) {
        self.loads += amount;
    }

    pub fn record_withdrawal(&mut self, amount: u64) {
        self.withdrawals += amount;
    }

    /// Expected total supply: seeds + loads - withdrawals.
    #[must_use]
    pub fn expected_supply(&self) -> u64 {
        self.seeds + self.loads - self.withdrawals
    }

    /// Verify that the observed supply matches the expected supply.
    ///
    /// # Errors
    /// Returns [`VersusError::SupplyInvariantViolation`] on mismatch.
    pub fn verify(&self, actual_supply: u64) -> Result<()> {
        let expected = self.expected_supply();
        if actual_supply != expected {
            return Err(VersusError::SupplyInvariantViolation {
                reason: format!(
                    "actual supply {actual_supply} != expected {expected} \
                     (seeds={}, loads={}, withdrawals={})",
                    self.seeds, self.loads, self.withdrawals
                ),
            });
        }
        Ok(())
    }
}
