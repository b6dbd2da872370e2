//! Chamber state machine and probability engine for Chamberwatch.
//!
//! A chamber holds a fixed sequence of lethal and harmless rounds. Rounds
//! are fired strictly in order, tools can disclose a round's kind without
//! firing it, and the probability engine reports what can be deduced from
//! the remaining counts and every disclosed fact.

pub mod config;
pub mod disclose;
pub mod engine;
pub mod error;
pub mod fire;
pub mod invariants;
pub mod probability;
pub mod round;
pub mod snapshot;
pub mod state;

pub use config::{ChamberConfig, MAX_TOTAL_ROUNDS, MIN_PER_KIND};
pub use disclose::{DisclosedRound, DisclosureStatus};
pub use engine::ChamberEngine;
pub use error::{ChamberError, CoreResult};
pub use fire::ConsumedRound;
pub use probability::{
    AggregateReport, Estimate, Odds, PositionEstimate, Probability, ProbabilityReport,
};
pub use round::{Knowledge, Round, RoundKind};
pub use snapshot::{ChamberSnapshot, FireOptions, NextPreview, SlotState, SlotView};
pub use state::{ChamberState, RoundCounts};
