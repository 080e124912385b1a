//! Tracing/logging initialization.
//!
//! JSON lines on stdout; the filter is configurable via `RUST_LOG`. The
//! authorization core logs configuration gaps (checks against undeclared
//! catalog pairs) at `warn`, and the route guard logs denials at `info`, so
//! the default filter keeps both visible.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default_filter("info");
}

/// Initialize with an explicit fallback filter, used when `RUST_LOG` is not
/// set.
pub fn init_with_default_filter(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
