//! Wager lifecycle manager.
//!
//! Owns the escrow-first entry path (create / accept), the write-once
//! report slots, and the synchronous hand-off to the resolver. Every
//! transition holds the wager's row lock from precondition check to state
//! write, and enters the ledger only through atomic per-account
//! operations, so a retried or concurrent call can never double-escrow or
//! double-pay.

use std::sync::Arc;

use versus_types::{
    AccountId, EngineConfig, ModerationList, Result, SelfReport, VersusError, Wager, WagerId,
    WagerState, constants,
};
use versus_ledger::{FundingQueue, Ledger};

use crate::book::WagerBook;
use crate::resolver::{Settlement, resolve};

/// Which report slot a participant owns.
enum Slot {
    Creator,
    Opponent,
}

/// The wager settlement engine.
///
/// Callers supply an authenticated account id; blocked status and role are
/// re-read from the ledger inside every operation.
pub struct WagerEngine {
    pub(crate) ledger: Arc<Ledger>,
    pub(crate) book: WagerBook,
    pub(crate) funding: FundingQueue,
    moderation: Arc<dyn ModerationList>,
    config: EngineConfig,
}

impl WagerEngine {
    #[must_use]
    pub fn new(ledger: Arc<Ledger>, moderation: Arc<dyn ModerationList>) -> Self {
        Self::with_config(ledger, moderation, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(
        ledger: Arc<Ledger>,
        moderation: Arc<dyn ModerationList>,
        config: EngineConfig,
    ) -> Self {
        Self {
            ledger,
            book: WagerBook::new(),
            funding: FundingQueue::new(),
            moderation,
            config,
        }
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Point-in-time snapshot of a wager.
    pub fn wager(&self, id: WagerId) -> Result<Wager> {
        self.book.get(id)
    }

    /// Create an Open wager, escrowing the creator's stake.
    ///
    /// The blocked/nickname/one-active/funds checks and the debit commit
    /// as one unit under the creator's account row lock.
    pub fn create_wager(
        &self,
        caller: AccountId,
        game: &str,
        stake: u64,
    ) -> Result<Wager> {
        let game = game.trim();
        if game.is_empty() || game.len() > constants::MAX_GAME_NAME_LEN {
            return Err(VersusError::Validation {
                reason: format!(
                    "game identifier must be 1..={} characters",
                    constants::MAX_GAME_NAME_LEN
                ),
            });
        }
        if stake == 0 {
            return Err(VersusError::Validation {
                reason: "stake must be a positive token amount".into(),
            });
        }
        if stake > self.config.max_stake {
            return Err(VersusError::Validation {
                reason: format!("stake exceeds maximum of {}", self.config.max_stake),
            });
        }

        let wager = Wager::new(game, stake, caller);
        self.ledger
            .escrow_stake(caller, wager.id, stake, self.moderation.as_ref())?;
        self.book.insert(wager.clone());
        tracing::info!(wager = %wager.id, creator = %caller, game, stake, "wager created");
        Ok(wager)
    }

    /// Accept an Open wager, escrowing the acceptor's stake and moving the
    /// wager to Active.
    pub fn accept_wager(&self, caller: AccountId, wager_id: WagerId) -> Result<Wager> {
        let row = self.book.row(wager_id)?;
        let mut wager = row.lock();

        if wager.state != WagerState::Open {
            return Err(VersusError::WrongWagerState {
                expected: WagerState::Open,
                actual: wager.state,
            });
        }
        if wager.creator_id == caller {
            return Err(VersusError::Validation {
                reason: "cannot accept your own wager".into(),
            });
        }

        self.ledger
            .escrow_stake(caller, wager.id, wager.stake, self.moderation.as_ref())?;
        wager.opponent_id = Some(caller);
        wager.state = WagerState::Active;
        tracing::info!(wager = %wager.id, opponent = %caller, "wager accepted");
        Ok(wager.clone())
    }

    /// File a self-report for an Active wager. First report per party is
    /// final. An `Appeal` report escalates to Held immediately; otherwise
    /// the resolver runs once both slots are populated.
    pub fn report_outcome(
        &self,
        caller: AccountId,
        wager_id: WagerId,
        report: SelfReport,
    ) -> Result<Wager> {
        let row = self.book.row(wager_id)?;
        let mut wager = row.lock();

        if wager.state != WagerState::Active {
            return Err(VersusError::WrongWagerState {
                expected: WagerState::Active,
                actual: wager.state,
            });
        }
        let slot = if wager.creator_id == caller {
            Slot::Creator
        } else if wager.opponent_id == Some(caller) {
            Slot::Opponent
        } else {
            return Err(VersusError::PermissionDenied {
                reason: format!("account {caller} is not a participant of wager {wager_id}"),
            });
        };
        if wager.report_of(caller).is_some() {
            return Err(VersusError::ReportAlreadyFiled);
        }

        match slot {
            Slot::Creator => wager.creator_report = Some(report),
            Slot::Opponent => wager.opponent_report = Some(report),
        }
        tracing::debug!(wager = %wager.id, reporter = %caller, report = %report, "report filed");

        // An appeal is a single Held-inducing event; it does not wait for
        // the other slot.
        if report == SelfReport::Appeal {
            self.escalate(&mut wager)?;
            return Ok(wager.clone());
        }

        if let (Some(creator), Some(opponent)) = (wager.creator_report, wager.opponent_report) {
            self.settle(&mut wager, resolve(creator, opponent))?;
        }
        Ok(wager.clone())
    }

    /// Escalate an Active wager to Held on a participant's appeal. Same
    /// eligibility and write-once slot rules as an `Appeal` report.
    pub fn request_appeal(&self, caller: AccountId, wager_id: WagerId) -> Result<Wager> {
        self.report_outcome(caller, wager_id, SelfReport::Appeal)
    }

    /// Conservation check:
    /// `balances + escrowed == seeds + loads - withdrawals`.
    pub fn verify_conservation(&self) -> Result<()> {
        self.ledger.verify_supply(self.book.escrowed_total())
    }

    fn settle(&self, wager: &mut Wager, settlement: Settlement) -> Result<()> {
        match settlement {
            Settlement::CreatorWins => {
                let winner = wager.creator_id;
                self.pay_winner(wager, winner)
            }
            Settlement::OpponentWins => {
                let Some(winner) = wager.opponent_id else {
                    return Err(VersusError::Validation {
                        reason: "active wager has no opponent".into(),
                    });
                };
                self.pay_winner(wager, winner)
            }
            Settlement::RefundBoth => self.refund_both(wager),
            Settlement::Escalate => self.escalate(wager),
        }
    }

    /// Pay 2×stake to the single winner and finalize.
    fn pay_winner(&self, wager: &mut Wager, winner: AccountId) -> Result<()> {
        self.ledger.credit(winner, wager.stake * 2)?;
        wager.state = WagerState::Finalized;
        wager.winner_id = Some(winner);
        self.release_markers(wager)?;
        tracing::info!(
            wager = %wager.id,
            winner = %winner,
            payout = wager.stake * 2,
            "wager settled"
        );
        Ok(())
    }

    /// Both reported loss: each stake flows back, no winner.
    fn refund_both(&self, wager: &mut Wager) -> Result<()> {
        self.ledger.credit(wager.creator_id, wager.stake)?;
        if let Some(opponent) = wager.opponent_id {
            self.ledger.credit(opponent, wager.stake)?;
        }
        wager.state = WagerState::Finalized;
        self.release_markers(wager)?;
        tracing::info!(wager = %wager.id, refund = wager.stake, "wager refunded to both parties");
        Ok(())
    }

    /// Park the wager for admin adjudication. Stakes stay escrowed; the
    /// one-active slots are freed (Held does not count against the
    /// one-active-wager rule).
    fn escalate(&self, wager: &mut Wager) -> Result<()> {
        wager.state = WagerState::Held;
        self.release_markers(wager)?;
        tracing::warn!(wager = %wager.id, "wager held for adjudication");
        Ok(())
    }

    fn release_markers(&self, wager: &Wager) -> Result<()> {
        self.ledger.clear_active_wager(wager.creator_id, wager.id)?;
        if let Some(opponent) = wager.opponent_id {
            self.ledger.clear_active_wager(opponent, wager.id)?;
        }
        Ok(())
    }
}
