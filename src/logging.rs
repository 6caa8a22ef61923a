//! Logging setup for binaries consuming this client.
//!
//! Library code only emits `tracing` events; initializing a subscriber is the
//! consumer's call. These helpers configure one the same way across apps.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Safe to call more than once; later calls are no-ops when a global
/// subscriber is already installed.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("barbearia_client={}", level).parse().unwrap());

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("logging initialized at level: {}", level);
    }
}
