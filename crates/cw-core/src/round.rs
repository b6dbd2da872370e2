//! Round kinds, knowledge states, and the round record.

use serde::{Deserialize, Serialize};

/// The true kind of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundKind {
    /// A live round.
    Lethal,
    /// A blank round.
    Harmless,
}

impl RoundKind {
    /// Both kinds, lethal first.
    pub const ALL: [RoundKind; 2] = [RoundKind::Lethal, RoundKind::Harmless];

    /// Returns the opposite kind.
    pub fn other(self) -> Self {
        match self {
            Self::Lethal => Self::Harmless,
            Self::Harmless => Self::Lethal,
        }
    }

    /// Parse a kind from user input. Accepts the common table-talk aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lethal" | "l" | "live" | "real" => Some(Self::Lethal),
            "harmless" | "h" | "blank" | "b" => Some(Self::Harmless),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lethal => write!(f, "lethal"),
            Self::Harmless => write!(f, "harmless"),
        }
    }
}

/// What is known about a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Knowledge {
    /// Kind not yet determined for any party.
    #[default]
    Unknown,
    /// Kind determined because the round was fired.
    KnownConsumed,
    /// Kind determined by a tool; the round has not been fired.
    KnownDisclosed,
}

/// One round of the chamber.
///
/// Fields are private: the kind is only observable once the knowledge state
/// says it has been determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    position: usize,
    knowledge: Knowledge,
    kind: Option<RoundKind>,
}

impl Round {
    pub(crate) fn unknown(position: usize) -> Self {
        Self {
            position,
            knowledge: Knowledge::Unknown,
            kind: None,
        }
    }

    /// Fixed 0-based position in the chamber.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The knowledge state of this round.
    pub fn knowledge(&self) -> Knowledge {
        self.knowledge
    }

    /// The kind, or `None` while the round is unknown.
    pub fn kind(&self) -> Option<RoundKind> {
        match self.knowledge {
            Knowledge::Unknown => None,
            _ => self.kind,
        }
    }

    /// Returns true once the round has been fired.
    pub fn is_consumed(&self) -> bool {
        self.knowledge == Knowledge::KnownConsumed
    }

    /// Returns true if the round was disclosed and is still in the chamber.
    pub fn is_disclosed(&self) -> bool {
        self.knowledge == Knowledge::KnownDisclosed
    }

    /// Returns true if nothing is known about the round.
    pub fn is_unknown(&self) -> bool {
        self.knowledge == Knowledge::Unknown
    }

    /// The raw stored kind, used by invariant checks.
    pub(crate) fn stored_kind(&self) -> Option<RoundKind> {
        self.kind
    }

    pub(crate) fn consume(&mut self, kind: RoundKind) {
        self.kind = Some(kind);
        self.knowledge = Knowledge::KnownConsumed;
    }

    pub(crate) fn disclose(&mut self, kind: RoundKind) {
        self.kind = Some(kind);
        self.knowledge = Knowledge::KnownDisclosed;
    }
}
