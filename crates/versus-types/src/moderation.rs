//! Moderation list seam.
//!
//! The nickname block list is owned by an external moderation service; the
//! engine only consults it. Wager-entry operations call
//! [`ModerationList::is_nickname_blocked`] under the account row lock so
//! the check is as fresh as the blocked flag itself.

use std::collections::HashSet;

/// "Is this nickname blocked?" lookup supplied by the moderation service.
pub trait ModerationList: Send + Sync {
    fn is_nickname_blocked(&self, nickname: &str) -> bool;
}

/// Set-backed moderation list. Suitable for tests and for deployments that
/// snapshot the external block list into memory.
#[derive(Debug, Default, Clone)]
pub struct BlockedNicknames {
    blocked: HashSet<String>,
}

impl BlockedNicknames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&mut self, nickname: impl Into<String>) {
        self.blocked.insert(nickname.into());
    }
}

impl ModerationList for BlockedNicknames {
    fn is_nickname_blocked(&self, nickname: &str) -> bool {
        self.blocked.contains(nickname)
    }
}

/// A moderation list that blocks nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoModeration;

impl ModerationList for NoModeration {
    fn is_nickname_blocked(&self, _nickname: &str) -> bool {
        false
    }
}
