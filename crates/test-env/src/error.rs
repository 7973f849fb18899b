//! Error types for the test environment bootstrap.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the environment definition file.
///
/// A missing definition file is not an error; the initializer falls back to
/// the built-in defaults instead.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The definition file exists but could not be read or parsed.
    #[error("Failed to load environment definition file {}: {source}", path.display())]
    DefinitionFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Errors raised while building typed settings from an environment store.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Errors raised by [`initialize_process`](crate::initialize_process).
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
