//! Consistency checks over a whole chamber state.
//!
//! Transitions preserve these by construction. The check exists for states
//! that arrive from outside (deserialization) and for tests.

use crate::config::ChamberConfig;
use crate::error::{ChamberError, CoreResult};
use crate::round::{Knowledge, RoundKind};
use crate::state::ChamberState;

impl ChamberState {
    /// Verify every structural invariant of the chamber.
    pub fn check_invariants(&self) -> CoreResult<()> {
        ChamberConfig::new(self.initial.lethal, self.initial.harmless)
            .validate()
            .map_err(|e| invalid(e.to_string()))?;

        let total = self.initial.total() as usize;
        if self.rounds.len() != total {
            return Err(invalid(format!(
                "{} rounds stored but {total} loaded",
                self.rounds.len()
            )));
        }

        let mut seen_live = false;
        for (i, round) in self.rounds.iter().enumerate() {
            if round.position() != i {
                return Err(invalid(format!(
                    "round at index {i} claims position {}",
                    round.position()
                )));
            }
            let has_kind = round.stored_kind().is_some();
            if has_kind == (round.knowledge() == Knowledge::Unknown) {
                return Err(invalid(format!(
                    "round {i} kind does not match its knowledge state"
                )));
            }
            if round.is_consumed() && seen_live {
                return Err(invalid(format!("round {i} fired out of order")));
            }
            seen_live |= !round.is_consumed();
        }

        let live = self.rounds.iter().filter(|r| !r.is_consumed()).count();
        if self.remaining.total() as usize != live {
            return Err(invalid(format!(
                "{} rounds counted as remaining but {live} unfired",
                self.remaining.total()
            )));
        }

        for kind in RoundKind::ALL {
            let fired = self
                .rounds
                .iter()
                .filter(|r| r.is_consumed() && r.kind() == Some(kind))
                .count() as u32;
            if self.initial.of(kind) != fired.saturating_add(self.remaining.of(kind)) {
                return Err(invalid(format!(
                    "{kind} counts disagree: {} loaded, {fired} fired, {} remaining",
                    self.initial.of(kind),
                    self.remaining.of(kind)
                )));
            }
            if self.disclosed_remaining(kind) > self.remaining.of(kind) {
                return Err(invalid(format!(
                    "more {kind} rounds disclosed than remain"
                )));
            }
        }

        Ok(())
    }
}

fn invalid(msg: String) -> ChamberError {
    ChamberError::InvalidState(msg)
}
