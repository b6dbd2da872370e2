//! Probability views over a chamber state.
//!
//! Everything here is a pure function of [`ChamberState`]. Probabilities
//! are exact reduced fractions; floating point only appears when rendering
//! percentages.

use serde::{Deserialize, Serialize};

use crate::round::{Round, RoundKind};
use crate::state::{ChamberState, RoundCounts};

/// An exact probability in `[0, 1]`, stored as a reduced fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionRepr")]
pub struct Probability {
    numerator: u32,
    denominator: u32,
}

#[derive(Deserialize)]
struct FractionRepr {
    numerator: u32,
    denominator: u32,
}

impl TryFrom<FractionRepr> for Probability {
    type Error = String;

    fn try_from(repr: FractionRepr) -> Result<Self, String> {
        Probability::new(repr.numerator, repr.denominator).ok_or_else(|| {
            format!(
                "{}/{} is not a probability",
                repr.numerator, repr.denominator
            )
        })
    }
}

impl Probability {
    /// Probability zero.
    pub const ZERO: Probability = Probability {
        numerator: 0,
        denominator: 1,
    };

    /// Probability one.
    pub const ONE: Probability = Probability {
        numerator: 1,
        denominator: 1,
    };

    /// Build `numerator / denominator`. Returns `None` unless
    /// `0 <= numerator <= denominator` and `denominator > 0`.
    pub fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 || numerator > denominator {
            return None;
        }
        let g = gcd(numerator, denominator);
        Some(Self {
            numerator: numerator / g,
            denominator: denominator / g,
        })
    }

    /// Reduced numerator.
    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    /// Reduced denominator.
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Returns true for an exact zero.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns true for an exact one.
    pub fn is_certain(&self) -> bool {
        self.numerator == self.denominator
    }

    /// The complementary probability `1 - p`.
    pub fn complement(&self) -> Self {
        Self {
            numerator: self.denominator - self.numerator,
            denominator: self.denominator,
        }
    }

    /// Floating-point value.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Percentage rounded to one decimal place.
    pub fn percent(&self) -> f64 {
        (self.as_f64() * 1000.0).round() / 10.0
    }
}

/// Renders `0%` for an exact zero and one decimal place otherwise.
impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            write!(f, "0%")
        } else {
            write!(f, "{:.1}%", self.percent())
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.max(1)
}

/// Complementary lethal / harmless probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Odds {
    /// Probability of lethal.
    pub lethal: Probability,
    /// Probability of harmless.
    pub harmless: Probability,
}

impl Odds {
    /// Odds proportional to a pair of counts. `None` when both are zero.
    pub fn from_counts(lethal: u32, harmless: u32) -> Option<Self> {
        let total = lethal.checked_add(harmless)?;
        let lethal = Probability::new(lethal, total)?;
        Some(Self {
            lethal,
            harmless: lethal.complement(),
        })
    }

    /// Degenerate odds: certainty for `kind`.
    pub fn certain(kind: RoundKind) -> Self {
        match kind {
            RoundKind::Lethal => Self {
                lethal: Probability::ONE,
                harmless: Probability::ZERO,
            },
            RoundKind::Harmless => Self {
                lethal: Probability::ZERO,
                harmless: Probability::ONE,
            },
        }
    }

    /// Probability of one kind.
    pub fn of(&self, kind: RoundKind) -> Probability {
        match kind {
            RoundKind::Lethal => self.lethal,
            RoundKind::Harmless => self.harmless,
        }
    }
}

/// What is believed about a single live round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum Estimate {
    /// The kind was disclosed by a tool.
    Disclosed {
        /// The disclosed kind.
        kind: RoundKind,
    },
    /// The round is unknown, but the remaining counts leave only one kind.
    Excluded {
        /// The only possible kind.
        kind: RoundKind,
    },
    /// Genuine uncertainty over the unknown rounds.
    Uncertain {
        /// Odds shared by every unknown round.
        odds: Odds,
    },
}

impl Estimate {
    /// The odds this estimate implies; degenerate when certain.
    pub fn odds(&self) -> Odds {
        match self {
            Self::Disclosed { kind } | Self::Excluded { kind } => Odds::certain(*kind),
            Self::Uncertain { odds } => *odds,
        }
    }

    /// The kind, if it is certain for any reason.
    pub fn certain_kind(&self) -> Option<RoundKind> {
        match self {
            Self::Disclosed { kind } | Self::Excluded { kind } => Some(*kind),
            Self::Uncertain { .. } => None,
        }
    }
}

/// An estimate tagged with where the round sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEstimate {
    /// 0-based position in the chamber.
    pub position: usize,
    /// 1-based rank among the rounds still in the chamber.
    pub remaining_ordinal: usize,
    /// The estimate for the round.
    pub estimate: Estimate,
}

/// Odds over every round still in the chamber, disclosed or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AggregateReport {
    /// No rounds remain.
    Exhausted,
    /// Some rounds remain.
    Remaining {
        /// Remaining counts by kind.
        counts: RoundCounts,
        /// `count / total` for each kind.
        odds: Odds,
    },
}

/// The three probability views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityReport {
    /// Aggregate odds over the remaining rounds.
    pub aggregate: AggregateReport,
    /// Estimate for the head, `None` when the chamber is empty.
    pub next: Option<PositionEstimate>,
    /// Estimates for every live round in position order.
    pub positions: Vec<PositionEstimate>,
}

impl ChamberState {
    /// Compute all three probability views.
    pub fn report(&self) -> ProbabilityReport {
        ProbabilityReport {
            aggregate: self.aggregate_report(),
            next: self.next_estimate(),
            positions: self.position_estimates(),
        }
    }

    /// Odds over all remaining rounds.
    pub fn aggregate_report(&self) -> AggregateReport {
        let counts = self.remaining_counts();
        match Odds::from_counts(counts.lethal, counts.harmless) {
            Some(odds) => AggregateReport::Remaining { counts, odds },
            None => AggregateReport::Exhausted,
        }
    }

    /// Estimate for the head round.
    pub fn next_estimate(&self) -> Option<PositionEstimate> {
        self.head().and_then(|r| self.position_estimate(r))
    }

    /// Estimates for every live round.
    pub fn position_estimates(&self) -> Vec<PositionEstimate> {
        self.rounds()
            .iter()
            .filter(|r| !r.is_consumed())
            .filter_map(|r| self.position_estimate(r))
            .collect()
    }

    /// Odds shared by every unknown round. `None` if nothing is unknown.
    pub fn unknown_odds(&self) -> Option<Odds> {
        Odds::from_counts(
            self.undisclosed_remaining(RoundKind::Lethal),
            self.undisclosed_remaining(RoundKind::Harmless),
        )
    }

    fn position_estimate(&self, round: &Round) -> Option<PositionEstimate> {
        let estimate = match round.kind() {
            Some(kind) => Estimate::Disclosed { kind },
            None => match self.excluded_kind() {
                Some(kind) => Estimate::Excluded { kind },
                None => Estimate::Uncertain {
                    odds: self.unknown_odds()?,
                },
            },
        };
        Some(PositionEstimate {
            position: round.position(),
            remaining_ordinal: self.remaining_ordinal(round.position())?,
            estimate,
        })
    }
}
