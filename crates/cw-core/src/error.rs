//! Error types for the chamber engine.

use crate::round::RoundKind;

/// Errors that can occur during chamber operations.
///
/// Every variant is a rule violation rather than a fault: the state is left
/// exactly as it was before the rejected call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChamberError {
    /// The requested round counts are outside the allowed bounds.
    #[error("invalid configuration ({lethal} lethal, {harmless} harmless): {reason}")]
    InvalidConfiguration {
        /// Requested lethal count.
        lethal: u32,
        /// Requested harmless count.
        harmless: u32,
        /// Which bound was violated.
        reason: String,
    },

    /// Every round has already been fired.
    #[error("the chamber is empty")]
    EmptyChamber,

    /// No rounds of the requested kind remain.
    #[error("no {0} rounds left")]
    NoRoundsOfKind(RoundKind),

    /// The head round is known to be a different kind than the one chosen.
    #[error("round {} is {actual}, cannot fire it as {chosen}", position + 1)]
    TypeMismatch {
        /// Position of the head round.
        position: usize,
        /// The kind the round is known to be.
        actual: RoundKind,
        /// The kind the caller tried to fire.
        chosen: RoundKind,
    },

    /// The position is out of range or already fired.
    #[error("position {position} is not a live round (chamber holds {total})")]
    InvalidPosition {
        /// The requested position.
        position: usize,
        /// Number of rounds in the chamber.
        total: usize,
    },

    /// A disclosure targeted an unknown round without saying what it is.
    #[error("round {} is unknown, its kind must be supplied", position + 1)]
    AssertionRequired {
        /// Position of the round.
        position: usize,
    },

    /// No game has been started.
    #[error("no active game")]
    NoActiveGame,

    /// A deserialized state violates a chamber invariant.
    #[error("inconsistent chamber state: {0}")]
    InvalidState(String),
}

/// Convenience result type for chamber operations.
pub type CoreResult<T> = Result<T, ChamberError>;
