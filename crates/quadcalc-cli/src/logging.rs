//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays clean for results. `QUADCALC_LOG`
//! takes `RUST_LOG`-style directives and overrides the `-v`/`-q` level.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives
pub const LOG_ENV_VAR: &str = "QUADCALC_LOG";

/// Build the filter for a verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(verbosity.level_filter().into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

/// Install the global subscriber
///
/// A second call is a no-op, so tests that run `main`-like code twice do not
/// fail.
pub fn init_tracing(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
