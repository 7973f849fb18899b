//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions on environment stores.

use test_env::defaults::required_keys;
use test_env::EnvStore;

/// Custom assertions for an initialized store
///
/// # Example
/// ```rust,ignore
/// store
///     .assert_complete()
///     .assert_value("APP_ENV", "testing")
///     .assert_absent("API_KEY");
/// ```
pub trait StoreAssertions {
    /// Assert that every required key has a non-empty value
    fn assert_complete(&self) -> &Self;

    /// Assert that `key` holds exactly `expected`
    fn assert_value(&self, key: &str, expected: &str) -> &Self;

    /// Assert that `key` has no non-empty value
    fn assert_absent(&self, key: &str) -> &Self;

    /// Assert that both stores contain the same entries
    fn assert_same_as(&self, other: &EnvStore) -> &Self;
}

impl StoreAssertions for EnvStore {
    fn assert_complete(&self) -> &Self {
        let missing: Vec<_> = required_keys().filter(|key| !self.contains(key)).collect();
        assert!(
            missing.is_empty(),
            "Required keys missing after initialization: {missing:?}"
        );
        self
    }

    fn assert_value(&self, key: &str, expected: &str) -> &Self {
        assert_eq!(
            self.get(key),
            Some(expected),
            "Unexpected value for {key}"
        );
        self
    }

    fn assert_absent(&self, key: &str) -> &Self {
        assert!(
            !self.contains(key),
            "Expected {key} to be absent, got {:?}",
            self.get(key)
        );
        self
    }

    fn assert_same_as(&self, other: &EnvStore) -> &Self {
        assert_eq!(self, other, "Stores differ");
        self
    }
}
