//! Tracing setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber, filtered by `METEO_LOG`
/// (falls back to `info`). Safe to call more than once; later calls are
/// no-ops because a global subscriber can only be set once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("METEO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
