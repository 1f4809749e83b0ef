//! # versus-ledger
//!
//! Durable-state plane of the Versus engine: the per-account balance
//! [`Ledger`], the [`SupplyTracker`] conservation checker, and the
//! [`FundingQueue`] that feeds approved loads and withdrawals into the
//! ledger exactly once.
//!
//! All mutations are atomic: every operation takes the owning row lock,
//! performs its checks, and either commits fully or returns before
//! touching anything.

pub mod funding;
pub mod ledger;
pub mod supply;

pub use funding::FundingQueue;
pub use ledger::Ledger;
pub use supply::SupplyTracker;
