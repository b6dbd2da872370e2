//! Configuration for a chamber session.

use cw_core::ChamberConfig;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Counts loaded by `start` when none are given.
    pub chamber: ChamberConfig,
    /// Whether a seeded dealer supplies the true kinds.
    pub dealer: bool,
    /// RNG seed for reproducible deals.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chamber: ChamberConfig::default(),
            dealer: false,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the default round counts.
    pub fn with_counts(mut self, lethal: u32, harmless: u32) -> Self {
        self.chamber = ChamberConfig::new(lethal, harmless);
        self
    }

    /// Enable or disable the dealer.
    pub fn with_dealer(mut self, dealer: bool) -> Self {
        self.dealer = dealer;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
