//! Funding request queue.
//!
//! Requests enter as `Pending` with no ledger effect. An admin decision
//! moves them out of `Pending` exactly once: the transition happens under
//! the request's row lock with a `Pending` precondition, so re-processing
//! is structurally impossible rather than merely checked. The ledger is
//! mutated if and only if the transition is to `Approved`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use versus_types::{
    AccountId, FundingDecision, FundingKind, FundingRequest, FundingState, PageRequest, Paged,
    RequestId, Result, VersusError,
};

use crate::ledger::Ledger;

/// Queue of load/withdraw requests awaiting admin decisions.
pub struct FundingQueue {
    requests: RwLock<HashMap<RequestId, Arc<Mutex<FundingRequest>>>>,
}

impl FundingQueue {
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(HashMap::new()),
        }
    }

    /// Create a pending request. No ledger effect.
    ///
    /// # Errors
    /// `Validation` for a zero amount, `AccountNotFound` for an unknown
    /// account.
    pub fn submit(
        &self,
        ledger: &Ledger,
        account_id: AccountId,
        kind: FundingKind,
        amount: u64,
    ) -> Result<FundingRequest> {
        if amount == 0 {
            return Err(VersusError::Validation {
                reason: "funding amount must be positive".into(),
            });
        }
        // Existence check only; the balance is not consulted until approval.
        ledger.balance(account_id)?;

        let request = FundingRequest::new(account_id, kind, amount);
        self.requests
            .write()
            .insert(request.id, Arc::new(Mutex::new(request.clone())));
        tracing::debug!(request = %request.id, account = %account_id, kind = %kind, amount, "funding request submitted");
        Ok(request)
    }

    /// Decide a pending request. The `Pending` precondition is checked and
    /// the terminal state written under the same row lock; a request that
    /// already left `Pending` fails `AlreadyProcessed`.
    ///
    /// An approved withdraw that fails `InsufficientFunds` leaves the
    /// request `Pending` so it can be retried or rejected later.
    pub fn decide(
        &self,
        ledger: &Ledger,
        request_id: RequestId,
        decision: FundingDecision,
    ) -> Result<FundingRequest> {
        let row = self
            .requests
            .read()
            .get(&request_id)
            .cloned()
            .ok_or(VersusError::FundingRequestNotFound(request_id))?;
        let mut guard = row.lock();

        if guard.state != FundingState::Pending {
            return Err(VersusError::AlreadyProcessed(request_id));
        }

        match decision {
            FundingDecision::Approve => {
                match guard.kind {
                    FundingKind::Load => ledger.fund(guard.account_id, guard.amount)?,
                    FundingKind::Withdraw => ledger.withdraw(guard.account_id, guard.amount)?,
                };
                guard.state = FundingState::Approved;
            }
            FundingDecision::Reject => {
                guard.state = FundingState::Rejected;
            }
        }
        guard.decided_at = Some(Utc::now());
        tracing::info!(request = %request_id, state = %guard.state, "funding request decided");
        Ok(guard.clone())
    }

    /// Snapshot of a single request.
    pub fn get(&self, request_id: RequestId) -> Result<FundingRequest> {
        let row = self
            .requests
            .read()
            .get(&request_id)
            .cloned()
            .ok_or(VersusError::FundingRequestNotFound(request_id))?;
        let guard = row.lock();
        Ok(guard.clone())
    }

    /// Pending requests, newest first, paginated.
    #[must_use]
    pub fn list_pending(&self, page: PageRequest) -> Paged<FundingRequest> {
        let mut pending: Vec<FundingRequest> = self
            .requests
            .read()
            .values()
            .filter_map(|row| {
                let guard = row.lock();
                guard.is_pending().then(|| guard.clone())
            })
            .collect();
        pending.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Paged::slice(pending, page)
    }
}

impl Default for FundingQueue {
    fn default() -> Self {
        Self::new()
    }
}
