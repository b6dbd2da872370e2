//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cw_core::RoundKind;

/// Which tool produced a disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Looks at the next round.
    Peek,
    /// Looks at a round by slot.
    Scan,
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Peek => write!(f, "peek"),
            Self::Scan => write!(f, "scan"),
        }
    }
}

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A chamber was loaded.
    GameStarted {
        /// 1-based game number within the session.
        game: u32,
        /// Lethal rounds loaded.
        lethal: u32,
        /// Harmless rounds loaded.
        harmless: u32,
        /// Whether a dealer supplies the kinds.
        dealer: bool,
        /// When the game started.
        timestamp: DateTime<Utc>,
    },
    /// A round was fired.
    Fired {
        /// Game number.
        game: u32,
        /// 0-based position of the round.
        position: usize,
        /// Kind of the fired round.
        kind: RoundKind,
        /// Whether it had been disclosed first.
        was_disclosed: bool,
        /// When it was fired.
        timestamp: DateTime<Utc>,
    },
    /// A round's kind was disclosed.
    Disclosed {
        /// Game number.
        game: u32,
        /// 0-based position of the round.
        position: usize,
        /// The disclosed kind.
        kind: RoundKind,
        /// Tool used.
        tool: Tool,
        /// When it was disclosed.
        timestamp: DateTime<Utc>,
    },
    /// The game was abandoned.
    Reset {
        /// Game number.
        game: u32,
        /// When it was reset.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// The game this entry belongs to.
    pub fn game(&self) -> u32 {
        match self {
            Self::GameStarted { game, .. }
            | Self::Fired { game, .. }
            | Self::Disclosed { game, .. }
            | Self::Reset { game, .. } => *game,
        }
    }
}
