//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunable limits for a Versus engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on a single wager's stake.
    pub max_stake: u64,
    /// Page size used when a caller does not specify one.
    pub default_page_size: usize,
    /// Hard cap on page size.
    pub max_page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_stake: constants::DEFAULT_MAX_STAKE,
            default_page_size: constants::DEFAULT_PAGE_SIZE,
            max_page_size: constants::MAX_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_constants() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_stake, constants::DEFAULT_MAX_STAKE);
        assert_eq!(cfg.default_page_size, constants::DEFAULT_PAGE_SIZE);
        assert_eq!(cfg.max_page_size, constants::MAX_PAGE_SIZE);
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = EngineConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.max_stake, back.max_stake);
        assert_eq!(cfg.max_page_size, back.max_page_size);
    }
}
