//! Recognized keys and their test fallbacks.

/// Secret token used by the external API client.
pub const API_TOKEN: &str = "API_TOKEN";

/// Legacy name that older consumers read the API token from.
pub const API_TOKEN_ALIAS: &str = "API_KEY";

/// Application environment name.
pub const APP_ENV: &str = "APP_ENV";

/// Cache backend selector.
pub const CACHE_DRIVER: &str = "CACHE_DRIVER";

/// Session backend selector.
pub const SESSION_DRIVER: &str = "SESSION_DRIVER";

/// Queue backend selector.
pub const QUEUE_DRIVER: &str = "QUEUE_DRIVER";

/// Placeholder API token. Never valid against a real service.
pub const DEFAULT_API_TOKEN: &str = "TEST-TOKEN-1234-5678-9ABC-DEF0";

/// Default application environment name.
pub const DEFAULT_APP_ENV: &str = "testing";

/// Default cache driver (in-memory).
pub const DEFAULT_CACHE_DRIVER: &str = "array";

/// Default session driver (in-memory).
pub const DEFAULT_SESSION_DRIVER: &str = "array";

/// Default queue driver (jobs run inline).
pub const DEFAULT_QUEUE_DRIVER: &str = "sync";

/// File name of the environment definition file.
pub const DEFINITION_FILE_NAME: &str = ".env.testing";

/// Every key guaranteed to be non-empty after initialization, paired with
/// its fallback value.
pub const FALLBACK_DEFAULTS: [(&str, &str); 5] = [
    (API_TOKEN, DEFAULT_API_TOKEN),
    (APP_ENV, DEFAULT_APP_ENV),
    (CACHE_DRIVER, DEFAULT_CACHE_DRIVER),
    (SESSION_DRIVER, DEFAULT_SESSION_DRIVER),
    (QUEUE_DRIVER, DEFAULT_QUEUE_DRIVER),
];

/// Iterate the names of the required keys.
pub fn required_keys() -> impl Iterator<Item = &'static str> {
    FALLBACK_DEFAULTS.iter().map(|(key, _)| *key)
}
