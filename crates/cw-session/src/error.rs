//! Error types for chamber sessions.

use thiserror::Error;

use cw_core::ChamberError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A game rule rejected the action.
    #[error("{0}")]
    Chamber(#[from] ChamberError),

    /// Invalid arguments for a known command.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The journal could not be serialized.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}
