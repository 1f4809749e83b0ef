//! Funding request model: queued load/withdraw requests that mutate the
//! ledger exactly once, on admin approval.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, RequestId};

/// Direction of a funding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingKind {
    /// Add tokens to the account's balance.
    Load,
    /// Remove tokens from the account's balance.
    Withdraw,
}

impl fmt::Display for FundingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "LOAD"),
            Self::Withdraw => write!(f, "WITHDRAW"),
        }
    }
}

/// State of a funding request. Transitions out of `Pending` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingState {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for FundingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// An admin's verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingDecision {
    Approve,
    Reject,
}

/// A queued request to add or remove tokens, requiring admin approval.
/// The ledger is mutated if and only if the request reaches `Approved`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingRequest {
    pub id: RequestId,
    pub account_id: AccountId,
    pub kind: FundingKind,
    /// Positive token amount.
    pub amount: u64,
    pub state: FundingState,
    pub created_at: DateTime<Utc>,
    /// Set when the request leaves `Pending`.
    pub decided_at: Option<DateTime<Utc>>,
}

impl FundingRequest {
    /// A fresh pending request.
    #[must_use]
    pub fn new(account_id: AccountId, kind: FundingKind, amount: u64) -> Self {
        Self {
            id: RequestId::new(),
            account_id,
            kind,
            amount,
            state: FundingState::Pending,
            created_at: Utc::now(),
            decided_at: None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == FundingState::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_is_pending() {
        let req = FundingRequest::new(AccountId::new(), FundingKind::Load, 50);
        assert!(req.is_pending());
        assert!(req.decided_at.is_none());
        assert_eq!(req.amount, 50);
    }

    #[test]
    fn kind_and_state_display() {
        assert_eq!(format!("{}", FundingKind::Load), "LOAD");
        assert_eq!(format!("{}", FundingKind::Withdraw), "WITHDRAW");
        assert_eq!(format!("{}", FundingState::Pending), "PENDING");
    }

    #[test]
    fn serde_roundtrip() {
        let req = FundingRequest::new(AccountId::new(), FundingKind::Withdraw, 10);
        let json = serde_json::to_string(&req).unwrap();
        let back: FundingRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.id, back.id);
        assert_eq!(req.kind, back.kind);
        assert_eq!(req.state, back.state);
    }
}
