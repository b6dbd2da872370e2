//! A seeded ground-truth load, held outside the chamber engine.
//!
//! The engine only records facts it is told. In dealer mode the session
//! draws a concrete shuffled load up front and reads every fired or
//! disclosed kind from it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use cw_core::{ChamberConfig, RoundKind};

/// A concrete, shuffled sequence of round kinds.
#[derive(Debug, Clone)]
pub struct Dealer {
    load: Vec<RoundKind>,
}

impl Dealer {
    /// Shuffle a load with the configured counts.
    pub fn deal(config: ChamberConfig, rng: &mut StdRng) -> Self {
        let lethal = std::iter::repeat_n(RoundKind::Lethal, config.lethal as usize);
        let harmless = std::iter::repeat_n(RoundKind::Harmless, config.harmless as usize);
        let mut load: Vec<RoundKind> = lethal.chain(harmless).collect();
        load.shuffle(rng);
        Self { load }
    }

    /// The true kind at a position.
    pub fn kind_at(&self, position: usize) -> Option<RoundKind> {
        self.load.get(position).copied()
    }

    /// Number of rounds in the load.
    pub fn len(&self) -> usize {
        self.load.len()
    }

    /// Returns true if the load is empty.
    pub fn is_empty(&self) -> bool {
        self.load.is_empty()
    }
}
