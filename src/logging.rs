// src/logging.rs
// =============================================================================
// Sets up tracing.
//
// Logs go to stderr: stdout carries the extracted JSON and must stay
// machine-readable. The level comes from -v flags unless RUST_LOG is set.
//
//   (none) -> warn
//   -v     -> info
//   -vv    -> debug
//   -vvv   -> trace
// =============================================================================

use tracing_subscriber::EnvFilter;

// Maps the number of -v flags to a default filter directive
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// Installs the global subscriber
//
// Parameters:
//   verbosity: how many times -v was given (ignored when RUST_LOG is set)
//
// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    // try_init fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
