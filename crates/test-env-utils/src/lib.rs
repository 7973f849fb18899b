//! # Test Env Utilities
//!
//! Shared test utilities for the `test-env` bootstrap.
//!
//! This crate provides:
//! - Project layout fixtures on temp dirs (`TestProject`)
//! - Custom assertions on `EnvStore` (`StoreAssertions`)
//! - Test tracing setup (`init_test_tracing`)
//! - Fixed test values
//!
//! ## Usage
//!
//! ```rust,ignore
//! use test_env_utils::*;
//!
//! #[test]
//! fn test_example() -> anyhow::Result<()> {
//!     let project = TestProject::with_definition("APP_ENV=staging\n")?;
//!     let mut store = EnvStore::new();
//!     project.initializer().initialize(&mut store)?;
//!
//!     store.assert_complete().assert_value("APP_ENV", "staging");
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod test_values;
pub mod tracing_setup;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;
pub use test_values::*;
pub use tracing_setup::*;
