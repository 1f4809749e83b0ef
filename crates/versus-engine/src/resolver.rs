//! Self-report resolver: the pure decision table.
//!
//! Maps a pair of self-reports to a settlement, symmetric in creator and
//! opponent. Runs only once both report slots are populated; persistence
//! and payouts are the lifecycle manager's job, which keeps this function
//! trivially unit-testable.

use versus_types::SelfReport;

/// Outcome of reconciling two self-reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Creator's "win" matches opponent's "loss": pay the creator 2×stake.
    CreatorWins,
    /// Opponent's "win" matches creator's "loss": pay the opponent 2×stake.
    OpponentWins,
    /// Both reported "loss": refund each stake, no winner.
    RefundBoth,
    /// Conflicting claims or an appeal: hold for admin adjudication.
    Escalate,
}

/// Resolve a pair of self-reports.
///
/// Total over all nine `{Win, Loss, Appeal}²` combinations:
///
/// | creator | opponent | settlement   |
/// |---------|----------|--------------|
/// | Win     | Loss     | CreatorWins  |
/// | Loss    | Win      | OpponentWins |
/// | Loss    | Loss     | RefundBoth   |
/// | Win     | Win      | Escalate     |
/// | Appeal  | *        | Escalate     |
/// | *       | Appeal   | Escalate     |
#[must_use]
pub fn resolve(creator: SelfReport, opponent: SelfReport) -> Settlement {
    use SelfReport::{Appeal, Loss, Win};
    match (creator, opponent) {
        (Win, Loss) => Settlement::CreatorWins,
        (Loss, Win) => Settlement::OpponentWins,
        (Loss, Loss) => Settlement::RefundBoth,
        (Win, Win) | (Appeal, _) | (_, Appeal) => Settlement::Escalate,
    }
}
