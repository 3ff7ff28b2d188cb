//! Logging initialization
//!
//! Sets up the tracing subscriber from the CLI verbosity flags, with the
//! `RECAST_LOG` environment variable taking precedence when set.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system for the given verbosity level
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env("RECAST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Map repeated `-v` flags to a default filter level
fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
