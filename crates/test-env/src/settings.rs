//! Typed view over an initialized environment store.
//!
//! The API token is held in a `SecretString` and redacted in Debug output.
//! Driver names the application may ship backends for are not validated here;
//! anything unrecognized is kept verbatim in an `Other` variant.

use crate::defaults::{API_TOKEN, APP_ENV, CACHE_DRIVER, QUEUE_DRIVER, SESSION_DRIVER};
use crate::error::ConfigError;
use crate::store::EnvStore;
use secrecy::SecretString;
use std::collections::HashMap;
use std::fmt;

/// Cache backend selected by `CACHE_DRIVER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheDriver {
    Array,
    File,
    Database,
    Redis,
    Memcached,
    Null,
    /// Any other backend name, trimmed.
    Other(String),
}

/// Session backend selected by `SESSION_DRIVER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDriver {
    Array,
    File,
    Cookie,
    Database,
    Redis,
    Other(String),
}

/// Queue backend selected by `QUEUE_DRIVER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueDriver {
    /// Jobs run inline on the dispatching thread.
    Sync,
    Database,
    Redis,
    /// Jobs are discarded.
    Null,
    Other(String),
}

impl From<&str> for CacheDriver {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "array" => Self::Array,
            "file" => Self::File,
            "database" => Self::Database,
            "redis" => Self::Redis,
            "memcached" => Self::Memcached,
            "null" => Self::Null,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<&str> for SessionDriver {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "array" => Self::Array,
            "file" => Self::File,
            "cookie" => Self::Cookie,
            "database" => Self::Database,
            "redis" => Self::Redis,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<&str> for QueueDriver {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "sync" => Self::Sync,
            "database" => Self::Database,
            "redis" => Self::Redis,
            "null" => Self::Null,
            _ => Self::Other(s.to_string()),
        }
    }
}

/// Settings consumed by the code under test.
#[derive(Clone)]
pub struct TestSettings {
    /// Token for the external API client.
    pub api_token: SecretString,

    /// Application environment name (e.g. "testing").
    pub app_env: String,

    pub cache_driver: CacheDriver,

    pub session_driver: SessionDriver,

    pub queue_driver: QueueDriver,
}

/// Custom Debug implementation that redacts the API token.
impl fmt::Debug for TestSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSettings")
            .field("api_token", &"[REDACTED]")
            .field("app_env", &self.app_env)
            .field("cache_driver", &self.cache_driver)
            .field("session_driver", &self.session_driver)
            .field("queue_driver", &self.queue_driver)
            .finish()
    }
}

impl TestSettings {
    /// Build settings from an initialized store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required key is absent or
    /// empty. This cannot happen after a successful
    /// [`EnvInitializer::initialize`](crate::EnvInitializer::initialize).
    pub fn from_store(store: &EnvStore) -> Result<Self, ConfigError> {
        Self::from_vars(store.vars())
    }

    /// Build settings from a HashMap (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required key is absent or
    /// empty.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let api_token = SecretString::from(required(vars, API_TOKEN)?.to_string());
        let app_env = required(vars, APP_ENV)?.to_string();
        let cache_driver = CacheDriver::from(required(vars, CACHE_DRIVER)?);
        let session_driver = SessionDriver::from(required(vars, SESSION_DRIVER)?);
        let queue_driver = QueueDriver::from(required(vars, QUEUE_DRIVER)?);

        Ok(TestSettings {
            api_token,
            app_env,
            cache_driver,
            session_driver,
            queue_driver,
        })
    }

    /// Whether the application runs in the "testing" environment.
    pub fn is_testing(&self) -> bool {
        self.app_env == "testing"
    }
}

fn required<'a>(vars: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ConfigError> {
    vars.get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}
