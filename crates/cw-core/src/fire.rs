//! The consumption rule: firing the head round.
//!
//! Rounds are fired strictly in position order. An unknown head takes the
//! kind the player fired, so the engine never needs a hidden permutation;
//! whatever was already disclosed constrains what can be fired.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChamberError, CoreResult};
use crate::round::RoundKind;
use crate::state::{ChamberState, RoundCounts};

/// The result of a successful fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumedRound {
    /// Position of the fired round.
    pub position: usize,
    /// The kind it turned out to be.
    pub kind: RoundKind,
    /// Whether the kind had been disclosed before firing.
    pub was_disclosed: bool,
    /// Remaining counts after the fire.
    pub remaining: RoundCounts,
}

impl ChamberState {
    /// Check whether `fire(chosen)` would succeed, without changing anything.
    ///
    /// Returns the head position on success.
    pub fn check_fire(&self, chosen: RoundKind) -> CoreResult<usize> {
        if self.remaining.of(chosen) == 0 {
            return Err(ChamberError::NoRoundsOfKind(chosen));
        }
        let head = self.head().ok_or(ChamberError::EmptyChamber)?;

        match head.kind() {
            Some(actual) if actual != chosen => Err(ChamberError::TypeMismatch {
                position: head.position(),
                actual,
                chosen,
            }),
            Some(_) => Ok(head.position()),
            // Every remaining round of the chosen kind sits disclosed further
            // down the chamber, so this one must be the other kind.
            None if self.undisclosed_remaining(chosen) == 0 => Err(ChamberError::TypeMismatch {
                position: head.position(),
                actual: chosen.other(),
                chosen,
            }),
            None => Ok(head.position()),
        }
    }

    /// Fire the head round as `chosen`.
    ///
    /// On error the state is unchanged.
    pub fn fire(&mut self, chosen: RoundKind) -> CoreResult<ConsumedRound> {
        let position = match self.check_fire(chosen) {
            Ok(position) => position,
            Err(err) => {
                debug!(%chosen, error = %err, "fire rejected");
                return Err(err);
            }
        };

        let round = &mut self.rounds[position];
        let was_disclosed = round.is_disclosed();
        round.consume(chosen);
        self.remaining.decrement(chosen);

        debug!(
            position,
            kind = %chosen,
            was_disclosed,
            lethal_remaining = self.remaining.lethal,
            harmless_remaining = self.remaining.harmless,
            "round fired"
        );

        Ok(ConsumedRound {
            position,
            kind: chosen,
            was_disclosed,
            remaining: self.remaining,
        })
    }
}
