//! Key-value environment store.
//!
//! `EnvStore` is the explicit configuration context handed to the initializer
//! and to the code under test. It only touches the real process environment
//! through [`EnvStore::from_process`] and [`EnvStore::export_to_process`].
//!
//! An empty value is treated as absent: [`EnvStore::contains`] and
//! [`EnvStore::set_if_absent`] both ignore keys mapped to `""`.

use std::collections::HashMap;
use std::env;

/// Mapping from environment keys to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvStore {
    vars: HashMap<String, String>,
}

impl EnvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Look up a key. Empty values are returned as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Look up a key, falling back to `default` when it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Whether `key` has a non-empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` unconditionally, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    /// Set `key` only if it currently has no non-empty value.
    ///
    /// Returns `true` when the value was written.
    pub fn set_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.vars.insert(key, value.into());
        true
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate all entries, including empty ones, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying map, e.g. for `Config::from_vars` style loaders.
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }

    /// Write every non-empty entry into the process environment, keeping any
    /// process variable that already has a non-empty value.
    ///
    /// Returns the number of variables written.
    pub fn export_to_process(&self) -> usize {
        let mut written = 0;
        for (key, value) in &self.vars {
            if value.is_empty() || key.is_empty() || key.contains('=') || key.contains('\0') {
                continue;
            }
            let already_set = env::var_os(key).is_some_and(|existing| !existing.is_empty());
            if already_set || value.contains('\0') {
                continue;
            }
            env::set_var(key, value);
            written += 1;
        }
        written
    }
}

impl From<HashMap<String, String>> for EnvStore {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
