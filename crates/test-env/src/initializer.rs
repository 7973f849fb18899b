//! Environment initializer.
//!
//! Populates an [`EnvStore`] before any test runs. Values come from the
//! optional `.env.testing` definition file first; any required key still
//! missing afterwards gets its built-in test fallback. Existing non-empty
//! values are never overwritten.

use crate::defaults::{API_TOKEN, API_TOKEN_ALIAS, DEFINITION_FILE_NAME, FALLBACK_DEFAULTS};
use crate::error::EnvError;
use crate::loader::load_definition_file;
use crate::store::EnvStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the initializer took its values from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// The definition file existed and was loaded.
    File(PathBuf),
    /// No definition file; only fallbacks were applied.
    Defaults,
}

/// Outcome of a single [`EnvInitializer::initialize`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub source: DefinitionSource,
    /// Keys written from the definition file, in file order.
    pub loaded: Vec<String>,
    /// Required keys filled with their fallback value.
    pub defaulted: Vec<String>,
    /// Whether the API token alias was written.
    pub aliased: bool,
}

/// Loads the test environment definition into an [`EnvStore`].
///
/// # Example
///
/// ```rust
/// use test_env::{EnvInitializer, EnvStore};
///
/// let initializer = EnvInitializer::for_bootstrap_dir(env!("CARGO_MANIFEST_DIR"));
/// let mut store = EnvStore::new();
/// initializer.initialize(&mut store).expect("bootstrap failed");
///
/// assert!(store.get("QUEUE_DRIVER").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct EnvInitializer {
    definition_path: PathBuf,
}

impl EnvInitializer {
    /// Use the definition file one directory above `bootstrap_dir`.
    ///
    /// A bootstrap living in `<crate>/tests` therefore reads
    /// `<crate>/.env.testing`. When `bootstrap_dir` has no parent the file is
    /// looked up inside `bootstrap_dir` itself.
    pub fn for_bootstrap_dir(bootstrap_dir: impl AsRef<Path>) -> Self {
        let bootstrap_dir = bootstrap_dir.as_ref();
        let base = bootstrap_dir.parent().unwrap_or(bootstrap_dir);
        Self {
            definition_path: base.join(DEFINITION_FILE_NAME),
        }
    }

    /// Use an explicit definition file path.
    pub fn with_definition_file(path: impl Into<PathBuf>) -> Self {
        Self {
            definition_path: path.into(),
        }
    }

    pub fn definition_path(&self) -> &Path {
        &self.definition_path
    }

    /// Populate `store` with the test environment.
    ///
    /// After a successful call every key in
    /// [`FALLBACK_DEFAULTS`](crate::defaults::FALLBACK_DEFAULTS) has a
    /// non-empty value. Calling this repeatedly leaves the store unchanged
    /// after the first call.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::DefinitionFile`] if the definition file exists but
    /// cannot be read or parsed. A missing file is not an error.
    pub fn initialize(&self, store: &mut EnvStore) -> Result<InitReport, EnvError> {
        let path = &self.definition_path;

        let (source, loaded, aliased) = if path.exists() {
            let mut loaded = Vec::new();
            let mut defines_token = false;
            for (key, value) in load_definition_file(path)? {
                defines_token |= key == API_TOKEN && !value.is_empty();
                if store.set_if_absent(key.as_str(), value) {
                    loaded.push(key);
                }
            }

            // The alias mirrors the store's token, which may be a preset
            // value that took precedence over the file.
            let aliased = match store.get(API_TOKEN).map(str::to_owned) {
                Some(token) if defines_token => store.set_if_absent(API_TOKEN_ALIAS, token),
                _ => false,
            };

            debug!(path = %path.display(), loaded = loaded.len(), aliased, "Loaded environment definition file");
            (DefinitionSource::File(path.clone()), loaded, aliased)
        } else {
            debug!(path = %path.display(), "No environment definition file, using fallbacks");
            (DefinitionSource::Defaults, Vec::new(), false)
        };

        let defaulted = ensure_defaults(store);

        info!(
            from_file = matches!(source, DefinitionSource::File(_)),
            loaded = loaded.len(),
            defaulted = defaulted.len(),
            "Test environment initialized"
        );

        Ok(InitReport {
            source,
            loaded,
            defaulted,
            aliased,
        })
    }
}

/// Fill every required key that is still absent with its fallback.
///
/// Returns the keys that were written.
pub fn ensure_defaults(store: &mut EnvStore) -> Vec<String> {
    let mut written = Vec::new();
    for (key, value) in FALLBACK_DEFAULTS {
        if store.set_if_absent(key, value) {
            written.push(key.to_string());
        }
    }
    written
}
