//! Shared test utilities for integration tests.
//!
//! Provides a temporary workspace with a host over it, plus helpers for
//! seeding and inspecting files.

#![allow(dead_code)]

use anyhow::Result;
use paster_kernel::host::PasterHost;
use paster_kernel::vfs::{PathPolicy, WorkspaceFs};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Temporary workspace directory with a host bound to it.
pub struct TestWorkspace {
    /// Backing directory, removed on drop
    pub temp_dir: TempDir,
    /// Host over the directory
    pub host: Arc<PasterHost>,
}

impl TestWorkspace {
    /// Creates an empty, root-confined workspace.
    pub fn new() -> Result<Self> {
        Self::with_policy(PathPolicy::confined())
    }

    /// Creates an empty workspace with the given path policy.
    pub fn with_policy(policy: PathPolicy) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let fs = WorkspaceFs::open(Some(temp_dir.path()), policy)?;
        let host = Arc::new(PasterHost::new(
            Arc::new(fs),
            temp_dir.path().display().to_string(),
        ));
        Ok(Self { temp_dir, host })
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a workspace-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Writes `content` to `relative`, creating parent directories.
    pub fn seed(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reads `relative` back from disk.
    pub fn read(&self, relative: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(relative))?)
    }
}

/// Renders `(path, content)` pairs in the pasted-text format.
pub fn paste(blocks: &[(&str, &str)]) -> String {
    blocks
        .iter()
        .map(|(path, content)| format!("File: {path}\nContent:\n{content}"))
        .collect::<Vec<_>>()
        .join("\n")
}
