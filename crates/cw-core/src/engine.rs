//! Game lifecycle around a single [`ChamberState`].

use tracing::{debug, info};

use crate::config::ChamberConfig;
use crate::disclose::DisclosedRound;
use crate::error::{ChamberError, CoreResult};
use crate::fire::ConsumedRound;
use crate::probability::ProbabilityReport;
use crate::round::RoundKind;
use crate::snapshot::ChamberSnapshot;
use crate::state::ChamberState;

/// Owns the state of the current game, if any.
///
/// Front ends hold the engine and read the state through [`Self::state`];
/// every mutation goes through the engine's methods.
#[derive(Debug, Clone, Default)]
pub struct ChamberEngine {
    state: Option<ChamberState>,
}

impl ChamberEngine {
    /// An engine with no game loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fresh chamber, replacing any game in progress.
    ///
    /// An invalid configuration leaves the current game untouched.
    pub fn start_game(&mut self, lethal: u32, harmless: u32) -> CoreResult<&ChamberState> {
        self.start_with(ChamberConfig::new(lethal, harmless))
    }

    /// Load a fresh chamber from a configuration.
    pub fn start_with(&mut self, config: ChamberConfig) -> CoreResult<&ChamberState> {
        let state = ChamberState::from_config(config)?;
        info!(
            lethal = config.lethal,
            harmless = config.harmless,
            "game started"
        );
        Ok(&*self.state.insert(state))
    }

    /// Discard the current game.
    pub fn reset(&mut self) {
        if self.state.take().is_some() {
            debug!("game discarded");
        }
    }

    /// Whether a game is loaded.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// The current state.
    pub fn state(&self) -> CoreResult<&ChamberState> {
        self.state.as_ref().ok_or(ChamberError::NoActiveGame)
    }

    fn state_mut(&mut self) -> CoreResult<&mut ChamberState> {
        self.state.as_mut().ok_or(ChamberError::NoActiveGame)
    }

    /// Fire the head round.
    pub fn fire(&mut self, kind: RoundKind) -> CoreResult<ConsumedRound> {
        self.state_mut()?.fire(kind)
    }

    /// Disclose the head round.
    pub fn reveal_next(&mut self, asserted: Option<RoundKind>) -> CoreResult<DisclosedRound> {
        self.state_mut()?.reveal_next(asserted)
    }

    /// Disclose the round at a position.
    pub fn reveal_at(
        &mut self,
        position: usize,
        asserted: Option<RoundKind>,
    ) -> CoreResult<DisclosedRound> {
        self.state_mut()?.reveal_at(position, asserted)
    }

    /// Probability report for the current game.
    pub fn report(&self) -> CoreResult<ProbabilityReport> {
        self.state().map(ChamberState::report)
    }

    /// Rendering snapshot for the current game.
    pub fn snapshot(&self) -> CoreResult<ChamberSnapshot> {
        self.state().map(ChamberState::snapshot)
    }
}
