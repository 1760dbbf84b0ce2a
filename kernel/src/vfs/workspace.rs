//! On-disk file access rooted at a workspace directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

use super::policy::PathPolicy;
use super::{AccessError, FileAccess};

/// Errors raised while opening a workspace.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The host has no workspace open.
    #[error("You must have a folder open in your workspace.")]
    NoWorkspace,

    /// The configured root does not exist or is not a directory.
    #[error("Workspace root is not a directory: {path}")]
    RootNotFound {
        /// Root as configured.
        path: PathBuf,
    },

    /// The root exists but could not be resolved.
    #[error("Invalid workspace root '{path}': {source}")]
    InvalidRoot {
        /// Root as configured.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// [`FileAccess`] over a directory on disk.
#[derive(Debug, Clone)]
pub struct WorkspaceFs {
    root: PathBuf,
    policy: PathPolicy,
}

impl WorkspaceFs {
    /// Opens the workspace at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::NoWorkspace`] when `root` is `None`, and
    /// another variant when the root is not an existing directory.
    pub fn open(root: Option<&Path>, policy: PathPolicy) -> Result<Self, WorkspaceError> {
        let root = root.ok_or(WorkspaceError::NoWorkspace)?;

        if !root.is_dir() {
            return Err(WorkspaceError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let canonical = dunce::canonicalize(root).map_err(|e| WorkspaceError::InvalidRoot {
            path: root.to_path_buf(),
            source: e,
        })?;

        debug!(root = %canonical.display(), confined = policy.is_confined(), "Opened workspace");
        Ok(Self {
            root: canonical,
            policy,
        })
    }

    /// Canonical workspace root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a workspace-relative path.
    ///
    /// # Errors
    ///
    /// Returns an error when the path policy rejects `path`.
    pub fn resolve(&self, path: &str) -> Result<PathBuf, AccessError> {
        self.policy.resolve(&self.root, path)
    }
}

#[async_trait]
impl FileAccess for WorkspaceFs {
    #[instrument(skip(self), level = "trace")]
    async fn read(&self, path: &str) -> Result<String, AccessError> {
        let full = self.resolve(path)?;
        let bytes = tokio::fs::read(&full)
            .await
            .map_err(|e| AccessError::from_io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    #[instrument(skip(self, content), fields(bytes = content.len()), level = "trace")]
    async fn write(&self, path: &str, content: &str) -> Result<(), AccessError> {
        let full = self.resolve(path)?;

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AccessError::Io {
                    path: path.to_string(),
                    source: e,
                })?;
        }

        tokio::fs::write(&full, content)
            .await
            .map_err(|e| AccessError::Io {
                path: path.to_string(),
                source: e,
            })
    }
}
