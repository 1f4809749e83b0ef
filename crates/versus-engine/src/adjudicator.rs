//! Appeal adjudicator: the only path out of Held.
//!
//! An admin names the winner; the engine never re-examines the
//! self-reports. The Held precondition is checked under the wager's row
//! lock, so a duplicate adjudication call (or a racing resolver) cannot
//! double-pay.

use versus_types::{AccountId, Result, VersusError, Wager, WagerId, WagerState};

use crate::lifecycle::WagerEngine;

impl WagerEngine {
    /// Finalize a Held wager by admin decision, paying 2×stake to the
    /// named winner.
    ///
    /// # Errors
    /// - `PermissionDenied` if the caller's current role is not admin
    /// - `WrongWagerState` unless the wager is Held
    /// - `Validation` if `winner_id` is not a participant (the wager
    ///   stays Held)
    pub fn adjudicate_appeal(
        &self,
        admin_id: AccountId,
        wager_id: WagerId,
        winner_id: AccountId,
    ) -> Result<Wager> {
        self.ledger.require_admin(admin_id)?;

        let row = self.book.row(wager_id)?;
        let mut wager = row.lock();

        if wager.state != WagerState::Held {
            return Err(VersusError::WrongWagerState {
                expected: WagerState::Held,
                actual: wager.state,
            });
        }
        if !wager.is_participant(winner_id) {
            return Err(VersusError::Validation {
                reason: format!("winner {winner_id} is not a participant of wager {wager_id}"),
            });
        }

        self.ledger.credit(winner_id, wager.stake * 2)?;
        wager.state = WagerState::Finalized;
        wager.winner_id = Some(winner_id);
        wager.resolved_by_appeal = true;
        tracing::info!(
            wager = %wager.id,
            admin = %admin_id,
            winner = %winner_id,
            payout = wager.stake * 2,
            "held wager adjudicated"
        );
        Ok(wager.clone())
    }
}
