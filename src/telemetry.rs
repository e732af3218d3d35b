//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG` when set and otherwise defaults to `info` with debug
/// detail for this crate. Later calls are no-ops, so tests can call it
/// freely.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lifeledger=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
