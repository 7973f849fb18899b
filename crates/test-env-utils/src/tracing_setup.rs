//! Tracing setup for tests.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a test subscriber honoring `RUST_LOG` (default `test_env=debug`).
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "test_env=debug".into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
