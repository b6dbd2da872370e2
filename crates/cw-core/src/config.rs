//! Chamber load configuration and its bounds.

use serde::{Deserialize, Serialize};

use crate::error::{ChamberError, CoreResult};

/// Maximum number of rounds a chamber can hold.
pub const MAX_TOTAL_ROUNDS: u32 = 10;

/// Minimum number of rounds of each kind.
pub const MIN_PER_KIND: u32 = 1;

/// How many rounds of each kind are loaded at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamberConfig {
    /// Number of lethal rounds.
    pub lethal: u32,
    /// Number of harmless rounds.
    pub harmless: u32,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self {
            lethal: 2,
            harmless: 3,
        }
    }
}

impl ChamberConfig {
    /// Create a configuration from explicit counts. Not validated yet.
    pub fn new(lethal: u32, harmless: u32) -> Self {
        Self { lethal, harmless }
    }

    /// Set the lethal count.
    pub fn with_lethal(mut self, lethal: u32) -> Self {
        self.lethal = lethal;
        self
    }

    /// Set the harmless count.
    pub fn with_harmless(mut self, harmless: u32) -> Self {
        self.harmless = harmless;
        self
    }

    /// Total rounds, saturating on overflow.
    pub fn total(&self) -> u32 {
        self.lethal.saturating_add(self.harmless)
    }

    /// Check the counts against [`MIN_PER_KIND`] and [`MAX_TOTAL_ROUNDS`].
    pub fn validate(&self) -> CoreResult<()> {
        let reason = if self.lethal < MIN_PER_KIND || self.harmless < MIN_PER_KIND {
            Some(format!("each kind needs at least {MIN_PER_KIND} round"))
        } else if self.total() > MAX_TOTAL_ROUNDS {
            Some(format!("at most {MAX_TOTAL_ROUNDS} rounds in total"))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ChamberError::InvalidConfiguration {
                lethal: self.lethal,
                harmless: self.harmless,
                reason,
            }),
            None => Ok(()),
        }
    }
}
