//! Command-driven chamber sessions.
//!
//! Wraps a [`cw_core::ChamberEngine`] in a line-oriented command language,
//! records every action in a journal, and can optionally deal a seeded
//! ground-truth load so the player never has to name kinds by hand.

pub mod config;
pub mod dealer;
pub mod error;
pub mod journal;
pub mod render;
pub mod session;

pub use config::SessionConfig;
pub use dealer::Dealer;
pub use error::{SessionError, SessionResult};
pub use journal::{Journal, JournalEntry};
pub use session::ChamberSession;
