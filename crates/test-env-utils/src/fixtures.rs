//! Project layout fixtures
//!
//! Provides `TestProject`, a temp directory shaped like a crate root with a
//! `tests/` bootstrap directory and an optional `.env.testing` beside it.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_env::defaults::DEFINITION_FILE_NAME;
use test_env::EnvInitializer;

/// Temporary project root. Removed when dropped.
///
/// # Example
/// ```rust,ignore
/// let project = TestProject::with_definition("API_TOKEN=XYZ\n")?;
/// let report = project.initializer().initialize(&mut store)?;
/// ```
pub struct TestProject {
    root: TempDir,
    bootstrap_dir: PathBuf,
}

impl TestProject {
    /// Create a project without a definition file.
    pub fn without_definition() -> Result<Self, anyhow::Error> {
        let root = tempfile::tempdir()?;
        let bootstrap_dir = root.path().join("tests");
        fs::create_dir(&bootstrap_dir)?;
        Ok(Self {
            root,
            bootstrap_dir,
        })
    }

    /// Create a project whose `.env.testing` holds `contents`.
    pub fn with_definition(contents: &str) -> Result<Self, anyhow::Error> {
        let project = Self::without_definition()?;
        project.write_definition(contents)?;
        Ok(project)
    }

    /// Replace (or create) the definition file.
    pub fn write_definition(&self, contents: &str) -> Result<(), anyhow::Error> {
        fs::write(self.definition_path(), contents)?;
        Ok(())
    }

    /// Delete the definition file if it exists.
    pub fn remove_definition(&self) -> Result<(), anyhow::Error> {
        let path = self.definition_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Directory the bootstrap lives in (`<root>/tests`).
    pub fn bootstrap_dir(&self) -> &Path {
        &self.bootstrap_dir
    }

    pub fn definition_path(&self) -> PathBuf {
        self.root.path().join(DEFINITION_FILE_NAME)
    }

    /// Initializer resolving the definition file from the bootstrap dir.
    pub fn initializer(&self) -> EnvInitializer {
        EnvInitializer::for_bootstrap_dir(&self.bootstrap_dir)
    }
}
