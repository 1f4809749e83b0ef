//! Account model.
//!
//! Accounts are created by an external registration flow; the engine owns
//! their token balance and the `active_wager` marker. The `blocked` flag is
//! mutated by an external admin action but is re-read from this record —
//! never from a caller-supplied credential — inside every wager-mutating
//! operation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, WagerId};

/// Privilege level attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular participant: may wager, report, and submit funding requests.
    Player,
    /// May adjudicate held wagers and decide funding requests.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "PLAYER"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

/// Point-in-time snapshot of an account row.
///
/// `balance` is a non-negative token count by construction (`u64`); the
/// ledger's checked arithmetic keeps it that way. `active_wager` is the
/// transactional marker backing the one-active-wager invariant: it is set
/// and cleared under the account's row lock, never by a separate
/// read-then-write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Current token balance (escrowed stakes are excluded).
    pub balance: u64,
    /// Blocked accounts may not enter wagers or submit funding requests.
    pub blocked: bool,
    pub role: Role,
    /// External-game nickname binding; checked against the moderation list
    /// at every wager entry.
    pub nickname: Option<String>,
    /// The wager currently holding this account's one-active slot, if any.
    pub active_wager: Option<WagerId>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// A fresh unblocked account with the given opening balance.
    #[must_use]
    pub fn new(id: AccountId, role: Role, opening_balance: u64) -> Self {
        Self {
            id,
            balance: opening_balance,
            blocked: false,
            role,
            nickname: None,
            active_wager: None,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
