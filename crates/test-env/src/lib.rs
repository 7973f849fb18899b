//! Test environment bootstrap.
//!
//! Loads the optional `.env.testing` definition file into an [`EnvStore`] and
//! fills the required keys (`API_TOKEN`, `APP_ENV`, `CACHE_DRIVER`,
//! `SESSION_DRIVER`, `QUEUE_DRIVER`) with deterministic test fallbacks, so a
//! test suite runs without external services.
//!
//! # Usage
//!
//! ```rust,ignore
//! // tests/common/mod.rs
//! let settings = test_env::initialize_process(concat!(env!("CARGO_MANIFEST_DIR"), "/tests"))?;
//! assert_eq!(std::env::var("QUEUE_DRIVER")?, "sync");
//! ```
//!
//! Code that prefers an explicit context can drive [`EnvInitializer`] on its
//! own [`EnvStore`] and never touch the process environment.

#![warn(clippy::pedantic)]

pub mod defaults;
pub mod error;
pub mod initializer;
pub mod loader;
pub mod settings;
pub mod store;

pub use error::{BootstrapError, ConfigError, EnvError};
pub use initializer::{ensure_defaults, DefinitionSource, EnvInitializer, InitReport};
pub use settings::{CacheDriver, QueueDriver, SessionDriver, TestSettings};
pub use store::EnvStore;

use std::path::Path;
use tracing::debug;

/// Bootstrap the real process environment.
///
/// Snapshots the process environment, runs the initializer for
/// `bootstrap_dir`, exports the result back with set-if-absent semantics and
/// returns the typed settings.
///
/// # Errors
///
/// Returns [`BootstrapError::Env`] if the definition file cannot be parsed.
/// The process environment is left untouched on error.
pub fn initialize_process(bootstrap_dir: impl AsRef<Path>) -> Result<TestSettings, BootstrapError> {
    let mut store = EnvStore::from_process();
    EnvInitializer::for_bootstrap_dir(bootstrap_dir).initialize(&mut store)?;

    // Nothing reaches the process environment unless every step succeeded.
    let settings = TestSettings::from_store(&store)?;

    let exported = store.export_to_process();
    debug!(exported, "Exported test environment to process");

    Ok(settings)
}
