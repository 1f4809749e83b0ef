//! Engine facade over the funding request queue.
//!
//! Adds the permission layer: submitters must be existing, non-blocked
//! accounts; decisions and pending listings require a fresh admin-role
//! check against the ledger.

use versus_types::{
    AccountId, FundingDecision, FundingKind, FundingRequest, PageRequest, Paged, RequestId,
    Result, VersusError,
};

use crate::lifecycle::WagerEngine;

impl WagerEngine {
    /// Queue a load/withdraw request for admin review. No ledger effect.
    pub fn submit_funding_request(
        &self,
        caller: AccountId,
        kind: FundingKind,
        amount: u64,
    ) -> Result<FundingRequest> {
        let account = self.ledger.snapshot(caller)?;
        if account.blocked {
            return Err(VersusError::AccountBlocked(caller));
        }
        self.funding.submit(&self.ledger, caller, kind, amount)
    }

    /// Decide a pending funding request. Admin only.
    pub fn approve_funding_request(
        &self,
        admin_id: AccountId,
        request_id: RequestId,
        decision: FundingDecision,
    ) -> Result<FundingRequest> {
        self.ledger.require_admin(admin_id)?;
        self.funding.decide(&self.ledger, request_id, decision)
    }

    /// Pending funding requests, newest first. Admin only.
    pub fn list_pending_funding_requests(
        &self,
        admin_id: AccountId,
        page: PageRequest,
    ) -> Result<Paged<FundingRequest>> {
        self.ledger.require_admin(admin_id)?;
        Ok(self.funding.list_pending(page))
    }
}
