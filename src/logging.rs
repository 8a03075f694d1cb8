//! Logging configuration for ethcmd.
//!
//! Logs go to stderr so stdout stays reserved for requests written by the
//! JSON transport.

use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` when set and valid, otherwise `default_level`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initializes logging to stderr.
///
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init_stderr_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
