//! Logging system initialization
//!
//! Console logging with timestamps and severity, configured once at
//! startup. `RUST_LOG` overrides the default `info` level.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system
///
/// Safe to call more than once; later calls are no-ops (tests may race to
/// install a subscriber).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
