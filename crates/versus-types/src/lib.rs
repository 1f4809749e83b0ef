//! # versus-types
//!
//! Shared types, errors, and configuration for the **Versus** wager
//! settlement engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`WagerId`], [`RequestId`]
//! - **Account model**: [`Account`], [`Role`]
//! - **Wager model**: [`Wager`], [`WagerState`], [`SelfReport`], [`OutcomeFilter`], [`WagerStats`]
//! - **Funding model**: [`FundingRequest`], [`FundingKind`], [`FundingState`], [`FundingDecision`]
//! - **Pagination**: [`PageRequest`], [`Paged`]
//! - **Moderation seam**: [`ModerationList`], [`BlockedNicknames`], [`NoModeration`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`VersusError`] with `VS_ERR_` prefix codes

pub mod account;
pub mod config;
pub mod constants;
pub mod error;
pub mod funding;
pub mod ids;
pub mod moderation;
pub mod page;
pub mod wager;

// Re-export all primary types at crate root for ergonomic imports:
//   use versus_types::{Wager, WagerState, SelfReport, ...};

pub use account::*;
pub use config::*;
pub use error::*;
pub use funding::*;
pub use ids::*;
pub use moderation::*;
pub use page::*;
pub use wager::*;

// Constants are accessed via `versus_types::constants::FOO`
// (not re-exported to avoid name collisions).
