//! Wager model: the two-party staked contest and its state machine.
//!
//! A wager escrows `stake` tokens from each participant. The stake is fixed
//! at creation and never changes. Reports are write-once per party; the
//! resolver consumes them once both slots are populated.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, WagerId};

/// Lifecycle state of a wager.
///
/// ```text
/// Open ──accept──▶ Active ──resolve──▶ Finalized
///   │                │
///   └──(never)       └──conflict/appeal──▶ Held ──adjudicate──▶ Finalized
/// ```
///
/// Wagers are never destroyed; Finalized rows are retained as history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WagerState {
    /// Created, stake escrowed from the creator, no opponent yet.
    Open,
    /// Matched; both stakes escrowed, awaiting self-reports.
    Active,
    /// Conflicting or appealed reports; only an admin can finalize.
    Held,
    /// Terminal: winner paid or both stakes refunded.
    Finalized,
}

impl fmt::Display for WagerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Held => write!(f, "HELD"),
            Self::Finalized => write!(f, "FINALIZED"),
        }
    }
}

/// A participant's self-reported outcome for a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelfReport {
    /// "I won."
    Win,
    /// "I lost."
    Loss,
    /// "I dispute this match" — escalates to Held regardless of the
    /// other party's report.
    Appeal,
}

impl fmt::Display for SelfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "WIN"),
            Self::Loss => write!(f, "LOSS"),
            Self::Appeal => write!(f, "APPEAL"),
        }
    }
}

/// Filter for account history listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeFilter {
    /// Finalized wagers the account won.
    Won,
    /// Finalized wagers with a winner that was not the account.
    Lost,
    /// Wagers finalized by admin adjudication.
    Appealed,
}

/// Per-account aggregate wager statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerStats {
    pub won: usize,
    pub lost: usize,
    pub appealed: usize,
}

/// A two-party staked contest over an external game's outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wager {
    pub id: WagerId,
    /// Identifier of the external game being contested.
    pub game: String,
    /// Tokens escrowed per participant. Fixed at creation.
    pub stake: u64,
    pub creator_id: AccountId,
    /// None until the wager is accepted.
    pub opponent_id: Option<AccountId>,
    pub state: WagerState,
    /// Creator's self-report. Write-once.
    pub creator_report: Option<SelfReport>,
    /// Opponent's self-report. Write-once.
    pub opponent_report: Option<SelfReport>,
    /// Set only when a single winner was paid.
    pub winner_id: Option<AccountId>,
    /// True when the terminal payout came from admin adjudication.
    pub resolved_by_appeal: bool,
    pub created_at: DateTime<Utc>,
}

impl Wager {
    /// A fresh Open wager with the creator's stake escrowed.
    #[must_use]
    pub fn new(game: impl Into<String>, stake: u64, creator_id: AccountId) -> Self {
        Self {
            id: WagerId::new(),
            game: game.into(),
            stake,
            creator_id,
            opponent_id: None,
            state: WagerState::Open,
            creator_report: None,
            opponent_report: None,
            winner_id: None,
            resolved_by_appeal: false,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_participant(&self, account_id: AccountId) -> bool {
        self.creator_id == account_id || self.opponent_id == Some(account_id)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state == WagerState::Finalized
    }

    /// The self-report filed by `account_id`, if any.
    #[must_use]
    pub fn report_of(&self, account_id: AccountId) -> Option<SelfReport> {
        if self.creator_id == account_id {
            self.creator_report
        } else if self.opponent_id == Some(account_id) {
            self.opponent_report
        } else {
            None
        }
    }

    /// Tokens currently escrowed for this wager: the creator's stake while
    /// Open, both stakes while Active or Held, nothing once Finalized.
    #[must_use]
    pub fn escrowed(&self) -> u64 {
        match self.state {
            WagerState::Open => self.stake,
            WagerState::Active | WagerState::Held => self.stake * 2,
            WagerState::Finalized => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wager_is_open() {
        let creator = AccountId::new();
        let w = Wager::new("lol-1v1", 30, creator);
        assert_eq!(w.state, WagerState::Open);
        assert_eq!(w.stake, 30);
        assert!(w.opponent_id.is_none());
        assert!(w.winner_id.is_none());
        assert!(!w.resolved_by_appeal);
    }

    #[test]
    fn participant_detection() {
        let creator = AccountId::new();
        let opponent = AccountId::new();
        let mut w = Wager::new("lol-1v1", 30, creator);
        assert!(w.is_participant(creator));
        assert!(!w.is_participant(opponent));

        w.opponent_id = Some(opponent);
        assert!(w.is_participant(opponent));
        assert!(!w.is_participant(AccountId::new()));
    }

    #[test]
    fn report_of_matches_slot() {
        let creator = AccountId::new();
        let opponent = AccountId::new();
        let mut w = Wager::new("lol-1v1", 30, creator);
        w.opponent_id = Some(opponent);
        w.creator_report = Some(SelfReport::Win);
        assert_eq!(w.report_of(creator), Some(SelfReport::Win));
        assert_eq!(w.report_of(opponent), None);
        assert_eq!(w.report_of(AccountId::new()), None);
    }

    #[test]
    fn escrowed_tracks_state() {
        let mut w = Wager::new("lol-1v1", 30, AccountId::new());
        assert_eq!(w.escrowed(), 30);
        w.state = WagerState::Active;
        assert_eq!(w.escrowed(), 60);
        w.state = WagerState::Held;
        assert_eq!(w.escrowed(), 60);
        w.state = WagerState::Finalized;
        assert_eq!(w.escrowed(), 0);
    }

    #[test]
    fn state_display_screaming() {
        assert_eq!(format!("{}", WagerState::Open), "OPEN");
        assert_eq!(format!("{}", WagerState::Held), "HELD");
        assert_eq!(format!("{}", SelfReport::Appeal), "APPEAL");
    }

    #[test]
    fn serde_roundtrip() {
        let w = Wager::new("lol-1v1", 30, AccountId::new());
        let json = serde_json::to_string(&w).unwrap();
        let back: Wager = serde_json::from_str(&json).unwrap();
        assert_eq!(w.id, back.id);
        assert_eq!(w.state, back.state);
        assert_eq!(w.stake, back.stake);
    }
}
