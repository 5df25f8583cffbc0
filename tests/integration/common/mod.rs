//! Shared fixtures for the integration suite.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// A temporary view directory populated with template files.
pub struct ViewFixture {
    dir: TempDir,
}

impl ViewFixture {
    /// Create an empty view directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Write (or overwrite) a template file and return its full path.
    pub async fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        tokio::fs::write(&path, content).await?;
        Ok(path)
    }

    /// The view directory itself.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
