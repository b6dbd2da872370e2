//! A read-only rendering view of the chamber.

use serde::{Deserialize, Serialize};

use crate::round::{Knowledge, RoundKind};
use crate::state::{ChamberState, RoundCounts};

/// How a slot should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "kind", rename_all = "snake_case")]
pub enum SlotState {
    /// Nothing known.
    Hidden,
    /// Disclosed, still in the chamber.
    Revealed(RoundKind),
    /// Already fired.
    Fired(RoundKind),
}

/// One slot of the chamber view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// 0-based position.
    pub position: usize,
    /// Display state.
    pub state: SlotState,
}

/// What the next-round indicator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "preview", content = "kind", rename_all = "snake_case")]
pub enum NextPreview {
    /// The chamber is empty.
    Empty,
    /// The head was disclosed.
    Disclosed(RoundKind),
    /// The head is unknown but forced by the remaining counts.
    Certain(RoundKind),
    /// The head is genuinely unknown.
    Unknown,
}

/// Which fire actions are currently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireOptions {
    /// `fire(Lethal)` would succeed.
    pub lethal: bool,
    /// `fire(Harmless)` would succeed.
    pub harmless: bool,
}

impl FireOptions {
    /// Whether firing `kind` is allowed.
    pub fn allows(&self, kind: RoundKind) -> bool {
        match kind {
            RoundKind::Lethal => self.lethal,
            RoundKind::Harmless => self.harmless,
        }
    }
}

/// Everything a front end needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamberSnapshot {
    /// Every slot in position order.
    pub slots: Vec<SlotView>,
    /// Head indicator.
    pub next: NextPreview,
    /// Remaining counts.
    pub remaining: RoundCounts,
    /// Counts at load time.
    pub initial: RoundCounts,
    /// Rounds still completely unknown.
    pub unknown_remaining: usize,
    /// Allowed fire actions.
    pub fire_options: FireOptions,
    /// Whether a positional disclosure can still learn anything.
    pub can_reveal_any: bool,
}

impl ChamberState {
    /// Build the rendering view.
    pub fn snapshot(&self) -> ChamberSnapshot {
        let slots = self
            .rounds()
            .iter()
            .map(|r| SlotView {
                position: r.position(),
                state: match (r.knowledge(), r.kind()) {
                    (Knowledge::KnownConsumed, Some(kind)) => SlotState::Fired(kind),
                    (Knowledge::KnownDisclosed, Some(kind)) => SlotState::Revealed(kind),
                    _ => SlotState::Hidden,
                },
            })
            .collect();

        let next = match self.head() {
            None => NextPreview::Empty,
            Some(head) => match head.kind() {
                Some(kind) => NextPreview::Disclosed(kind),
                None => self
                    .excluded_kind()
                    .map_or(NextPreview::Unknown, NextPreview::Certain),
            },
        };

        let unknown_remaining = self.unknown_count();

        ChamberSnapshot {
            slots,
            next,
            remaining: self.remaining_counts(),
            initial: self.initial_counts(),
            unknown_remaining,
            fire_options: FireOptions {
                lethal: self.check_fire(RoundKind::Lethal).is_ok(),
                harmless: self.check_fire(RoundKind::Harmless).is_ok(),
            },
            can_reveal_any: unknown_remaining > 0,
        }
    }
}
