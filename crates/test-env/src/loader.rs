//! Environment definition file loading.
//!
//! Parsing is delegated to `dotenvy`, which handles quoting, escapes,
//! comments, `export` prefixes and `${VAR}` substitution.

use crate::error::EnvError;
use std::path::Path;
use tracing::debug;

/// Parse the definition file at `path`, returning its pairs in file order.
///
/// The process environment is not modified.
pub fn load_definition_file(path: &Path) -> Result<Vec<(String, String)>, EnvError> {
    let to_error = |source: dotenvy::Error| EnvError::DefinitionFile {
        path: path.to_path_buf(),
        source,
    };

    let pairs = dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_error)?;

    debug!(path = %path.display(), entries = pairs.len(), "Parsed environment definition file");

    Ok(pairs)
}
