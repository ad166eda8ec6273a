//! Logging setup for embedding hosts.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Respects `RUST_LOG` when set, otherwise uses `default_level` (typically
/// [`crate::Config::log_level`]). Safe to call more than once; later calls
/// are no-ops.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
