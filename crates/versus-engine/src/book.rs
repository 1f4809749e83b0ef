//! Wager row store.
//!
//! Each wager lives behind its own mutex; a lifecycle transition holds the
//! row lock across its precondition checks, ledger effects, and state
//! write, so the resolver's and the adjudicator's terminal transitions are
//! mutually exclusive on the same wager. Wagers are never removed — the
//! book is also the history.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use versus_types::{Result, VersusError, Wager, WagerId, WagerState};

/// Container owning every wager row, live and historical.
pub struct WagerBook {
    wagers: RwLock<HashMap<WagerId, Arc<Mutex<Wager>>>>,
}

impl WagerBook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            wagers: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, wager: Wager) {
        self.wagers
            .write()
            .insert(wager.id, Arc::new(Mutex::new(wager)));
    }

    /// The row handle for a wager; callers lock it for the duration of a
    /// transition.
    pub fn row(&self, id: WagerId) -> Result<Arc<Mutex<Wager>>> {
        self.wagers
            .read()
            .get(&id)
            .cloned()
            .ok_or(VersusError::WagerNotFound(id))
    }

    /// Point-in-time clone of a single wager.
    pub fn get(&self, id: WagerId) -> Result<Wager> {
        let row = self.row(id)?;
        let guard = row.lock();
        Ok(guard.clone())
    }

    /// Clones of all wagers matching `pred`, newest first.
    pub fn snapshot_filtered(&self, pred: impl Fn(&Wager) -> bool) -> Vec<Wager> {
        let mut rows: Vec<Wager> = self
            .wagers
            .read()
            .values()
            .filter_map(|row| {
                let guard = row.lock();
                pred(&guard).then(|| guard.clone())
            })
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    /// Tokens currently escrowed across all non-terminal wagers.
    #[must_use]
    pub fn escrowed_total(&self) -> u64 {
        self.wagers
            .read()
            .values()
            .map(|row| row.lock().escrowed())
            .sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wagers.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wagers.read().is_empty()
    }
}

impl Default for WagerBook {
    fn default() -> Self {
        Self::new()
    }
}
