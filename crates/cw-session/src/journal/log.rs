//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;
use crate::error::SessionResult;

/// A chronological log of session actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Chamber Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::GameStarted {
                    game,
                    lethal,
                    harmless,
                    dealer,
                    ..
                } => {
                    out.push_str(&format!("## Game {game}\n\n"));
                    out.push_str(&format!(
                        "**Loaded**: {lethal} lethal, {harmless} harmless"
                    ));
                    if *dealer {
                        out.push_str(" (dealer)");
                    }
                    out.push_str("\n\n");
                }
                JournalEntry::Fired {
                    position,
                    kind,
                    was_disclosed,
                    ..
                } => {
                    out.push_str(&format!("- **Fired** slot {}: {kind}", position + 1));
                    if *was_disclosed {
                        out.push_str(" *(known)*");
                    }
                    out.push('\n');
                }
                JournalEntry::Disclosed {
                    position,
                    kind,
                    tool,
                    ..
                } => {
                    out.push_str(&format!(
                        "- **{}** slot {}: {kind}\n",
                        capitalize(&tool.to_string()),
                        position + 1
                    ));
                }
                JournalEntry::Reset { game, .. } => {
                    out.push_str(&format!("\n*Game {game} reset*\n\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Chamber Journal\n===============\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::GameStarted {
                    game,
                    lethal,
                    harmless,
                    dealer,
                    timestamp,
                } => {
                    out.push_str(&format!(
                        "[{}] Game {game}: {lethal} lethal, {harmless} harmless{}\n",
                        timestamp.format("%H:%M:%S"),
                        if *dealer { " (dealer)" } else { "" }
                    ));
                }
                JournalEntry::Fired {
                    position,
                    kind,
                    was_disclosed,
                    timestamp,
                    ..
                } => {
                    out.push_str(&format!(
                        "[{}]   fired slot {}: {kind}{}\n",
                        timestamp.format("%H:%M:%S"),
                        position + 1,
                        if *was_disclosed { " (known)" } else { "" }
                    ));
                }
                JournalEntry::Disclosed {
                    position,
                    kind,
                    tool,
                    timestamp,
                    ..
                } => {
                    out.push_str(&format!(
                        "[{}]   {tool} slot {}: {kind}\n",
                        timestamp.format("%H:%M:%S"),
                        position + 1
                    ));
                }
                JournalEntry::Reset { game, timestamp } => {
                    out.push_str(&format!(
                        "[{}] Game {game} reset\n",
                        timestamp.format("%H:%M:%S")
                    ));
                }
            }
        }
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
