//! Per-account balance ledger.
//!
//! The ledger is the source of truth for account state: token balance,
//! blocked flag, role, nickname binding, and the `active_wager` marker.
//! Each account lives behind its own row mutex, so operations against the
//! same account serialize while operations on disjoint accounts proceed
//! independently. Account row locks are leaf locks: no ledger operation
//! acquires a second account row while holding one.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, MutexGuard, RwLock};
use versus_types::{
    Account, AccountId, ModerationList, Result, Role, VersusError, WagerId,
};

use crate::supply::SupplyTracker;

/// Mutable account row. Only ever touched under its mutex.
#[derive(Debug)]
struct AccountRow {
    balance: u64,
    blocked: bool,
    role: Role,
    nickname: Option<String>,
    active_wager: Option<WagerId>,
    created_at: chrono::DateTime<Utc>,
}

/// Race-free token balance ledger with per-account row locks.
pub struct Ledger {
    accounts: RwLock<HashMap<AccountId, Arc<Mutex<AccountRow>>>>,
    /// Conservation tracker. Locked before any account row in funding paths.
    supply: Mutex<SupplyTracker>,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            supply: Mutex::new(SupplyTracker::new()),
        }
    }

    /// Register an account with an opening balance. The opening balance is
    /// recorded as seeded supply.
    ///
    /// # Errors
    /// Returns `Validation` if the account already exists.
    pub fn open_account(&self, id: AccountId, role: Role, opening_balance: u64) -> Result<()> {
        let mut supply = self.supply.lock();
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&id) {
            return Err(VersusError::Validation {
                reason: format!("account {id} already exists"),
            });
        }
        accounts.insert(
            id,
            Arc::new(Mutex::new(AccountRow {
                balance: opening_balance,
                blocked: false,
                role,
                nickname: None,
                active_wager: None,
                created_at: Utc::now(),
            })),
        );
        supply.record_seed(opening_balance);
        Ok(())
    }

    fn row(&self, id: AccountId) -> Result<Arc<Mutex<AccountRow>>> {
        self.accounts
            .read()
            .get(&id)
            .cloned()
            .ok_or(VersusError::AccountNotFound(id))
    }

    /// Current balance. Escrowed stakes are not part of the balance.
    pub fn balance(&self, id: AccountId) -> Result<u64> {
        Ok(self.row(id)?.lock().balance)
    }

    /// Point-in-time snapshot of the full account record.
    pub fn snapshot(&self, id: AccountId) -> Result<Account> {
        let row = self.row(id)?;
        let guard = row.lock();
        Ok(Account {
            id,
            balance: guard.balance,
            blocked: guard.blocked,
            role: guard.role,
            nickname: guard.nickname.clone(),
            active_wager: guard.active_wager,
            created_at: guard.created_at,
        })
    }

    /// Atomically increment the balance. Returns the new balance.
    ///
    /// # Errors
    /// `AccountNotFound` for unknown accounts, `BalanceOverflow` if the
    /// credit would overflow.
    pub fn credit(&self, id: AccountId, amount: u64) -> Result<u64> {
        let row = self.row(id)?;
        let mut guard = row.lock();
        Self::credit_row(&mut guard, amount)
    }

    /// Atomically decrement the balance. Returns the new balance.
    ///
    /// # Errors
    /// `InsufficientFunds` if `balance < amount`.
    pub fn debit(&self, id: AccountId, amount: u64) -> Result<u64> {
        let row = self.row(id)?;
        let mut guard = row.lock();
        Self::debit_row(&mut guard, amount)
    }

    fn credit_row(guard: &mut MutexGuard<'_, AccountRow>, amount: u64) -> Result<u64> {
        guard.balance = guard
            .balance
            .checked_add(amount)
            .ok_or(VersusError::BalanceOverflow)?;
        Ok(guard.balance)
    }

    fn debit_row(guard: &mut MutexGuard<'_, AccountRow>, amount: u64) -> Result<u64> {
        if guard.balance < amount {
            return Err(VersusError::InsufficientFunds {
                needed: amount,
                available: guard.balance,
            });
        }
        guard.balance -= amount;
        Ok(guard.balance)
    }

    /// The transactional unit for entering a wager. Under one row lock:
    ///
    /// 1. Re-read the blocked flag (never trusted from a credential)
    /// 2. Consult the moderation list against the nickname binding
    /// 3. Check the one-active-wager marker is empty
    /// 4. Debit the stake
    /// 5. Set the marker to `wager_id`
    ///
    /// Any failure leaves the row untouched. Returns the new balance.
    pub fn escrow_stake(
        &self,
        id: AccountId,
        wager_id: WagerId,
        stake: u64,
        moderation: &dyn ModerationList,
    ) -> Result<u64> {
        let row = self.row(id)?;
        let mut guard = row.lock();

        if guard.blocked {
            return Err(VersusError::AccountBlocked(id));
        }
        if let Some(nickname) = &guard.nickname {
            if moderation.is_nickname_blocked(nickname) {
                return Err(VersusError::NicknameBlocked {
                    nickname: nickname.clone(),
                });
            }
        }
        if guard.active_wager.is_some() {
            return Err(VersusError::ActiveWagerExists);
        }

        let balance = Self::debit_row(&mut guard, stake)?;
        guard.active_wager = Some(wager_id);
        Ok(balance)
    }

    /// Clear the one-active-wager marker, but only if it still points at
    /// `wager_id`. Called when a wager leaves the Open/Active states.
    pub fn clear_active_wager(&self, id: AccountId, wager_id: WagerId) -> Result<()> {
        let row = self.row(id)?;
        let mut guard = row.lock();
        if guard.active_wager == Some(wager_id) {
            guard.active_wager = None;
        }
        Ok(())
    }

    /// Credit from an approved load request. Records the movement in the
    /// supply tracker. Funding-queue use only.
    pub fn fund(&self, id: AccountId, amount: u64) -> Result<u64> {
        let mut supply = self.supply.lock();
        let balance = self.credit(id, amount)?;
        supply.record_load(amount);
        Ok(balance)
    }

    /// Debit from an approved withdraw request. Records the movement in the
    /// supply tracker. Funding-queue use only.
    pub fn withdraw(&self, id: AccountId, amount: u64) -> Result<u64> {
        let mut supply = self.supply.lock();
        let balance = self.debit(id, amount)?;
        supply.record_withdrawal(amount);
        Ok(balance)
    }

    /// Block or unblock an account. External admin hook.
    pub fn set_blocked(&self, id: AccountId, blocked: bool) -> Result<()> {
        self.row(id)?.lock().blocked = blocked;
        Ok(())
    }

    /// Bind or replace the account's nickname. External profile hook.
    pub fn set_nickname(&self, id: AccountId, nickname: impl Into<String>) -> Result<()> {
        self.row(id)?.lock().nickname = Some(nickname.into());
        Ok(())
    }

    /// Change an account's role. External admin hook.
    pub fn set_role(&self, id: AccountId, role: Role) -> Result<()> {
        self.row(id)?.lock().role = role;
        Ok(())
    }

    /// Fresh admin-role check against the source of truth.
    ///
    /// # Errors
    /// `PermissionDenied` if the account's current role is not `Admin`.
    pub fn require_admin(&self, id: AccountId) -> Result<()> {
        let row = self.row(id)?;
        let guard = row.lock();
        if guard.role == Role::Admin {
            Ok(())
        } else {
            Err(VersusError::PermissionDenied {
                reason: format!("account {id} is not an admin"),
            })
        }
    }

    /// Sum of all account balances (escrowed stakes excluded).
    #[must_use]
    pub fn balances_total(&self) -> u64 {
        let accounts = self.accounts.read();
        accounts.values().map(|row| row.lock().balance).sum()
    }

    /// Verify the conservation invariant given the tokens currently held
    /// in wager escrow.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if
    /// `balances + escrowed != seeds + loads - withdrawals`.
    pub fn verify_supply(&self, escrowed: u64) -> Result<()> {
        let supply = self.supply.lock();
        let actual = self.balances_total() + escrowed;
        supply.verify(actual)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
