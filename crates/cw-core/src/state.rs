//! The round sequence and its read accessors.
//!
//! `ChamberState` is the canonical game value. Its fields are private; the
//! only mutators are the consumption rule ([`crate::fire`]) and the
//! disclosure rules ([`crate::disclose`]).

use serde::{Deserialize, Serialize};

use crate::config::ChamberConfig;
use crate::error::{ChamberError, CoreResult};
use crate::round::{Round, RoundKind};

/// A pair of per-kind round counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundCounts {
    /// Lethal rounds.
    pub lethal: u32,
    /// Harmless rounds.
    pub harmless: u32,
}

impl RoundCounts {
    /// Create a count pair.
    pub fn new(lethal: u32, harmless: u32) -> Self {
        Self { lethal, harmless }
    }

    /// The count for one kind.
    pub fn of(&self, kind: RoundKind) -> u32 {
        match kind {
            RoundKind::Lethal => self.lethal,
            RoundKind::Harmless => self.harmless,
        }
    }

    /// Sum of both kinds, saturating on overflow.
    pub fn total(&self) -> u32 {
        self.lethal.saturating_add(self.harmless)
    }

    pub(crate) fn decrement(&mut self, kind: RoundKind) {
        match kind {
            RoundKind::Lethal => self.lethal -= 1,
            RoundKind::Harmless => self.harmless -= 1,
        }
    }
}

/// The state of one game: a fixed sequence of rounds plus remaining counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRepr")]
pub struct ChamberState {
    pub(crate) rounds: Vec<Round>,
    pub(crate) initial: RoundCounts,
    pub(crate) remaining: RoundCounts,
}

/// Untrusted wire shape, checked before it becomes a `ChamberState`.
#[derive(Deserialize)]
struct StateRepr {
    rounds: Vec<Round>,
    initial: RoundCounts,
    remaining: RoundCounts,
}

impl TryFrom<StateRepr> for ChamberState {
    type Error = ChamberError;

    fn try_from(repr: StateRepr) -> CoreResult<Self> {
        let state = Self {
            rounds: repr.rounds,
            initial: repr.initial,
            remaining: repr.remaining,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl ChamberState {
    /// Create a fresh chamber with every round unknown.
    pub fn create(lethal: u32, harmless: u32) -> CoreResult<Self> {
        Self::from_config(ChamberConfig::new(lethal, harmless))
    }

    /// Create a fresh chamber from a validated configuration.
    pub fn from_config(config: ChamberConfig) -> CoreResult<Self> {
        config.validate()?;
        let total = config.total() as usize;
        let counts = RoundCounts::new(config.lethal, config.harmless);
        Ok(Self {
            rounds: (0..total).map(Round::unknown).collect(),
            initial: counts,
            remaining: counts,
        })
    }

    /// All rounds in position order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds the chamber was loaded with.
    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// The earliest round that has not been fired.
    pub fn head(&self) -> Option<&Round> {
        self.rounds.iter().find(|r| !r.is_consumed())
    }

    /// The round at a position, if in range.
    pub fn at(&self, position: usize) -> Option<&Round> {
        self.rounds.get(position)
    }

    /// Counts of rounds not yet fired, by true kind.
    pub fn remaining_counts(&self) -> RoundCounts {
        self.remaining
    }

    /// Counts the chamber was loaded with.
    pub fn initial_counts(&self) -> RoundCounts {
        self.initial
    }

    /// Returns true when every round has been fired.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.total() == 0
    }

    /// Number of rounds fired so far.
    pub fn consumed_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_consumed()).count()
    }

    /// Number of rounds still completely unknown.
    pub fn unknown_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.is_unknown()).count()
    }

    /// Disclosed, not yet fired rounds of a kind.
    pub fn disclosed_remaining(&self, kind: RoundKind) -> u32 {
        self.rounds
            .iter()
            .filter(|r| r.is_disclosed() && r.kind() == Some(kind))
            .count() as u32
    }

    /// Rounds of a kind that are still hidden among the unknown ones.
    pub fn undisclosed_remaining(&self, kind: RoundKind) -> u32 {
        self.remaining
            .of(kind)
            .saturating_sub(self.disclosed_remaining(kind))
    }

    /// 1-based rank of a live round among the rounds still in the chamber.
    ///
    /// Returns `None` for fired or out-of-range positions.
    pub fn remaining_ordinal(&self, position: usize) -> Option<usize> {
        let round = self.at(position)?;
        if round.is_consumed() {
            return None;
        }
        Some(
            self.rounds[..=position]
                .iter()
                .filter(|r| !r.is_consumed())
                .count(),
        )
    }

    /// The kind an unknown round must have by count arithmetic, if forced.
    pub fn excluded_kind(&self) -> Option<RoundKind> {
        let lethal = self.undisclosed_remaining(RoundKind::Lethal);
        let harmless = self.undisclosed_remaining(RoundKind::Harmless);
        match (lethal, harmless) {
            (0, h) if h > 0 => Some(RoundKind::Harmless),
            (l, 0) if l > 0 => Some(RoundKind::Lethal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_lays_out_unknown_rounds() {
        let state = ChamberState::create(2, 3).unwrap();
        assert_eq!(state.total_rounds(), 5);
        assert_eq!(state.remaining_counts(), RoundCounts::new(2, 3));
        assert_eq!(state.initial_counts(), RoundCounts::new(2, 3));
        assert_eq!(state.unknown_count(), 5);
        for (i, round) in state.rounds().iter().enumerate() {
            assert_eq!(round.position(), i);
            assert_eq!(round.kind(), None);
        }
        assert!(!state.is_exhausted());
    }

    #[test]
    fn create_rejects_bad_counts() {
        assert!(matches!(
            ChamberState::create(0, 1),
            Err(ChamberError::InvalidConfiguration { .. })
        ));
        assert!(ChamberState::create(1, 0).is_err());
        assert!(ChamberState::create(6, 5).is_err());
    }

    #[test]
    fn head_is_first_round() {
        let state = ChamberState::create(1, 1).unwrap();
        assert_eq!(state.head().map(Round::position), Some(0));
        assert!(state.at(2).is_none());
    }

    #[test]
    fn remaining_ordinal_skips_fired_rounds() {
        let mut state = ChamberState::create(2, 2).unwrap();
        state.fire(RoundKind::Harmless).unwrap();
        assert_eq!(state.remaining_ordinal(0), None);
        assert_eq!(state.remaining_ordinal(1), Some(1));
        assert_eq!(state.remaining_ordinal(3), Some(3));
        assert_eq!(state.remaining_ordinal(4), None);
    }

    #[test]
    fn excluded_kind_from_counts() {
        let mut state = ChamberState::create(1, 2).unwrap();
        assert_eq!(state.excluded_kind(), None);
        state.reveal_at(2, Some(RoundKind::Lethal)).unwrap();
        assert_eq!(state.undisclosed_remaining(RoundKind::Lethal), 0);
        assert_eq!(state.excluded_kind(), Some(RoundKind::Harmless));
    }

    #[test]
    fn serde_round_trip() {
        let mut state = ChamberState::create(2, 2).unwrap();
        state.reveal_at(3, Some(RoundKind::Lethal)).unwrap();
        state.fire(RoundKind::Harmless).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: ChamberState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn deserialize_rejects_inconsistent_counts() {
        let state = ChamberState::create(1, 1).unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        value["remaining"]["lethal"] = serde_json::json!(5);
        let result: Result<ChamberState, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_overflowing_counts() {
        let json = r#"{
            "rounds": [],
            "initial": {"lethal": 4294967295, "harmless": 1},
            "remaining": {"lethal": 4294967295, "harmless": 1}
        }"#;
        let result: Result<ChamberState, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_loads_outside_bounds() {
        let empty = r#"{
            "rounds": [],
            "initial": {"lethal": 0, "harmless": 0},
            "remaining": {"lethal": 0, "harmless": 0}
        }"#;
        assert!(serde_json::from_str::<ChamberState>(empty).is_err());

        // Twelve unknown rounds, otherwise consistent.
        let state = ChamberState::create(2, 8).unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        let mut rounds = value["rounds"].as_array().unwrap().clone();
        let extra = rounds[..2].to_vec();
        rounds.extend(extra);
        for (i, round) in rounds.iter_mut().enumerate() {
            round["position"] = serde_json::json!(i);
        }
        value["rounds"] = serde_json::Value::Array(rounds);
        value["initial"] = serde_json::json!({"lethal": 12, "harmless": 0});
        value["remaining"] = serde_json::json!({"lethal": 12, "harmless": 0});
        assert!(serde_json::from_value::<ChamberState>(value).is_err());
    }
}
