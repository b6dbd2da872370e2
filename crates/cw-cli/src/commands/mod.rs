pub mod export;
pub mod odds;
pub mod play;

use tracing::debug;

use cw_session::{ChamberSession, SessionConfig};

/// Build a session and apply a `;`-separated script to it.
fn scripted_session(
    config: SessionConfig,
    script: Option<&str>,
) -> Result<ChamberSession, String> {
    let mut session =
        ChamberSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;
    if let Some(script) = script {
        debug!(script, "applying script");
        session.run_script(script).map_err(|e| e.to_string())?;
    }
    Ok(session)
}
