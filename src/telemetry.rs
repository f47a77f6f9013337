//! Process-wide `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the formatting subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `fallback_filter` is used. Calling
/// this more than once keeps the first subscriber.
pub fn init(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    // Err only means a global subscriber is already installed.
    drop(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
    );
}
