//! Journal of game actions within a session.

pub mod entry;
pub mod log;

pub use entry::{JournalEntry, Tool};
pub use log::Journal;
