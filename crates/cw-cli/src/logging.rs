//! Logging initialization for the `cw` binary.
//!
//! Logs go to stderr so they never mix with command output. `CW_LOG`
//! overrides the verbosity flag with a full `EnvFilter` directive.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides `-v`.
pub const LOG_ENV: &str = "CW_LOG";

/// Maps a verbosity level to a tracing directive string.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
