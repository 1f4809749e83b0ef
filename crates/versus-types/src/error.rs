//! Error types for the Versus settlement engine.
//!
//! All errors use the `VS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Account / permission errors
//! - 2xx: Balance errors
//! - 3xx: Wager errors
//! - 4xx: Funding request errors
//! - 9xx: General / invariant errors
//!
//! Every rejected operation maps to exactly one variant — there is no
//! generic catch-all failure — and every failure path leaves persisted
//! state unchanged.

use thiserror::Error;

use crate::{AccountId, RequestId, WagerId, WagerState};

/// Central error enum for all Versus operations.
#[derive(Debug, Error)]
pub enum VersusError {
    // =================================================================
    // Account / Permission Errors (1xx)
    // =================================================================
    /// The referenced account does not exist.
    #[error("VS_ERR_100: Account not found: {0}")]
    AccountNotFound(AccountId),

    /// The account is blocked and may not enter or mutate wagers.
    #[error("VS_ERR_101: Account is blocked: {0}")]
    AccountBlocked(AccountId),

    /// The account's nickname is on the moderation block list.
    #[error("VS_ERR_102: Nickname is blocked: {nickname}")]
    NicknameBlocked { nickname: String },

    /// The caller lacks the privilege for this operation.
    #[error("VS_ERR_103: Permission denied: {reason}")]
    PermissionDenied { reason: String },

    // =================================================================
    // Balance Errors (2xx)
    // =================================================================
    /// A debit exceeds the account's current balance.
    #[error("VS_ERR_200: Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    /// A credit would overflow the balance counter.
    #[error("VS_ERR_201: Balance overflow")]
    BalanceOverflow,

    // =================================================================
    // Wager Errors (3xx)
    // =================================================================
    /// The referenced wager does not exist.
    #[error("VS_ERR_300: Wager not found: {0}")]
    WagerNotFound(WagerId),

    /// The operation is invalid for the wager's current state.
    #[error("VS_ERR_301: Wrong wager state: expected {expected}, got {actual}")]
    WrongWagerState {
        expected: WagerState,
        actual: WagerState,
    },

    /// The caller already filed a report for this wager (first report is final).
    #[error("VS_ERR_302: Report already filed for this wager")]
    ReportAlreadyFiled,

    /// The account already has a wager in Open or Active state.
    #[error("VS_ERR_303: Account already has an open or active wager")]
    ActiveWagerExists,

    // =================================================================
    // Funding Request Errors (4xx)
    // =================================================================
    /// The referenced funding request does not exist.
    #[error("VS_ERR_400: Funding request not found: {0}")]
    FundingRequestNotFound(RequestId),

    /// The funding request has already been approved or rejected.
    #[error("VS_ERR_401: Funding request already processed: {0}")]
    AlreadyProcessed(RequestId),

    // =================================================================
    // General / Invariant Errors (9xx)
    // =================================================================
    /// Malformed or out-of-range input.
    #[error("VS_ERR_900: Validation failed: {reason}")]
    Validation { reason: String },

    /// Token conservation invariant violated — critical safety alert.
    #[error("VS_ERR_901: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, VersusError>;
