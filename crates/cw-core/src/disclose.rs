//! Disclosure rules: learning a round's kind without firing it.
//!
//! The engine has no ground truth to consult, so the caller supplies the
//! kind. Once recorded, the fact binds every later fire.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChamberError, CoreResult};
use crate::round::RoundKind;
use crate::state::ChamberState;

/// Whether a disclosure recorded a new fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureStatus {
    /// The round was unknown and now carries the asserted kind.
    Recorded,
    /// The round was already known; nothing changed.
    AlreadyKnown,
}

/// The result of a disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosedRound {
    /// Position of the disclosed round.
    pub position: usize,
    /// Its kind.
    pub kind: RoundKind,
    /// Whether this call changed the state.
    pub status: DisclosureStatus,
}

impl ChamberState {
    /// Disclose the head round.
    pub fn reveal_next(&mut self, asserted: Option<RoundKind>) -> CoreResult<DisclosedRound> {
        let position = self
            .head()
            .map(|r| r.position())
            .ok_or(ChamberError::EmptyChamber)?;
        self.disclose_live(position, asserted)
    }

    /// Disclose the round at `position`, which must not have been fired.
    pub fn reveal_at(
        &mut self,
        position: usize,
        asserted: Option<RoundKind>,
    ) -> CoreResult<DisclosedRound> {
        match self.at(position) {
            Some(round) if !round.is_consumed() => self.disclose_live(position, asserted),
            _ => Err(ChamberError::InvalidPosition {
                position,
                total: self.total_rounds(),
            }),
        }
    }

    fn disclose_live(
        &mut self,
        position: usize,
        asserted: Option<RoundKind>,
    ) -> CoreResult<DisclosedRound> {
        if let Some(kind) = self.rounds[position].kind() {
            return Ok(DisclosedRound {
                position,
                kind,
                status: DisclosureStatus::AlreadyKnown,
            });
        }

        let kind = asserted.ok_or(ChamberError::AssertionRequired { position })?;
        if self.undisclosed_remaining(kind) == 0 {
            debug!(position, %kind, "disclosure contradicts remaining counts");
            return Err(ChamberError::NoRoundsOfKind(kind));
        }

        self.rounds[position].disclose(kind);
        debug!(position, %kind, "round disclosed");

        Ok(DisclosedRound {
            position,
            kind,
            status: DisclosureStatus::Recorded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::Knowledge;

    #[test]
    fn reveal_next_records_kind_without_consuming() {
        let mut state = ChamberState::create(2, 2).unwrap();
        let disclosed = state.reveal_next(Some(RoundKind::Lethal)).unwrap();
        assert_eq!(disclosed.position, 0);
        assert_eq!(disclosed.status, DisclosureStatus::Recorded);
        assert_eq!(state.at(0).unwrap().knowledge(), Knowledge::KnownDisclosed);
        assert_eq!(state.remaining_counts().lethal, 2);
        assert_eq!(state.consumed_count(), 0);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut state = ChamberState::create(2, 2).unwrap();
        state.reveal_next(Some(RoundKind::Harmless)).unwrap();
        let after_first = state.clone();

        let again = state.reveal_next(Some(RoundKind::Lethal)).unwrap();
        assert_eq!(again.kind, RoundKind::Harmless);
        assert_eq!(again.status, DisclosureStatus::AlreadyKnown);
        assert_eq!(state, after_first);

        let by_position = state.reveal_at(0, None).unwrap();
        assert_eq!(by_position.kind, RoundKind::Harmless);
        assert_eq!(by_position.status, DisclosureStatus::AlreadyKnown);
        assert_eq!(state, after_first);
    }

    #[test]
    fn reveal_requires_assertion_for_unknown_round() {
        let mut state = ChamberState::create(1, 1).unwrap();
        assert_eq!(
            state.reveal_next(None),
            Err(ChamberError::AssertionRequired { position: 0 })
        );
        assert_eq!(
            state.reveal_at(1, None),
            Err(ChamberError::AssertionRequired { position: 1 })
        );
        assert_eq!(state.unknown_count(), 2);
    }

    #[test]
    fn reveal_next_on_empty_chamber() {
        let mut state = ChamberState::create(1, 1).unwrap();
        state.fire(RoundKind::Harmless).unwrap();
        state.fire(RoundKind::Lethal).unwrap();
        assert_eq!(
            state.reveal_next(Some(RoundKind::Lethal)),
            Err(ChamberError::EmptyChamber)
        );
    }

    #[test]
    fn reveal_at_rejects_invalid_positions() {
        let mut state = ChamberState::create(1, 2).unwrap();
        state.fire(RoundKind::Harmless).unwrap();
        let before = state.clone();

        assert_eq!(
            state.reveal_at(3, Some(RoundKind::Lethal)),
            Err(ChamberError::InvalidPosition {
                position: 3,
                total: 3
            })
        );
        assert_eq!(
            state.reveal_at(0, Some(RoundKind::Harmless)),
            Err(ChamberError::InvalidPosition {
                position: 0,
                total: 3
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn reveal_rejects_kind_with_nothing_left_to_hide() {
        let mut state = ChamberState::create(1, 2).unwrap();
        state.reveal_at(1, Some(RoundKind::Lethal)).unwrap();
        let before = state.clone();
        assert_eq!(
            state.reveal_at(2, Some(RoundKind::Lethal)),
            Err(ChamberError::NoRoundsOfKind(RoundKind::Lethal))
        );
        assert_eq!(state, before);
        assert!(state.reveal_at(2, Some(RoundKind::Harmless)).is_ok());
    }

    #[test]
    fn reveal_does_not_touch_counters() {
        let mut state = ChamberState::create(3, 3).unwrap();
        state.reveal_at(5, Some(RoundKind::Harmless)).unwrap();
        state.reveal_at(2, Some(RoundKind::Lethal)).unwrap();
        assert_eq!(state.remaining_counts().total(), 6);
        assert_eq!(state.disclosed_remaining(RoundKind::Lethal), 1);
        assert_eq!(state.undisclosed_remaining(RoundKind::Harmless), 2);
    }
}
