//! System-wide limits and defaults.

/// Default page size for listing operations.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Hard cap on page size; larger requests are clamped.
pub const MAX_PAGE_SIZE: usize = 100;

/// Default upper bound on a single wager's stake.
pub const DEFAULT_MAX_STAKE: u64 = 1_000_000;

/// Maximum length of a game identifier string.
pub const MAX_GAME_NAME_LEN: usize = 64;
