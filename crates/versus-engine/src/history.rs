//! Read-only listing and history surface.
//!
//! All reads are point-in-time snapshots, newest first, paginated.

use versus_types::{
    AccountId, OutcomeFilter, PageRequest, Paged, Wager, WagerState, WagerStats,
};

use crate::lifecycle::WagerEngine;

impl WagerEngine {
    /// Open wagers awaiting an opponent.
    #[must_use]
    pub fn list_open_wagers(&self, page: PageRequest) -> Paged<Wager> {
        Paged::slice(
            self.book.snapshot_filtered(|w| w.state == WagerState::Open),
            page,
        )
    }

    /// Held wagers awaiting adjudication.
    #[must_use]
    pub fn list_held_wagers(&self, page: PageRequest) -> Paged<Wager> {
        Paged::slice(
            self.book.snapshot_filtered(|w| w.state == WagerState::Held),
            page,
        )
    }

    /// An account's wagers past the Open state, optionally filtered by
    /// outcome.
    #[must_use]
    pub fn list_account_history(
        &self,
        account_id: AccountId,
        page: PageRequest,
        filter: Option<OutcomeFilter>,
    ) -> Paged<Wager> {
        let rows = self.book.snapshot_filtered(|w| {
            w.is_participant(account_id)
                && w.state != WagerState::Open
                && match filter {
                    None => true,
                    Some(OutcomeFilter::Won) => w.winner_id == Some(account_id),
                    Some(OutcomeFilter::Lost) => {
                        w.is_terminal()
                            && w.winner_id.is_some()
                            && w.winner_id != Some(account_id)
                    }
                    Some(OutcomeFilter::Appealed) => w.resolved_by_appeal,
                }
        });
        Paged::slice(rows, page)
    }

    /// Aggregate win/loss/appeal counts for an account's profile.
    #[must_use]
    pub fn account_stats(&self, account_id: AccountId) -> WagerStats {
        let mut stats = WagerStats::default();
        for wager in self
            .book
            .snapshot_filtered(|w| w.is_participant(account_id) && w.is_terminal())
        {
            if wager.winner_id == Some(account_id) {
                stats.won += 1;
            } else if wager.winner_id.is_some() {
                stats.lost += 1;
            }
            if wager.resolved_by_appeal {
                stats.appealed += 1;
            }
        }
        stats
    }
}
