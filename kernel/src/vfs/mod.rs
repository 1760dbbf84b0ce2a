//! File-access capability used by the reconciler.
//!
//! The reconciler never touches the filesystem directly. It is handed a
//! [`FileAccess`] implementation owned by the caller: [`WorkspaceFs`] for a
//! real workspace directory, or [`MemoryFs`] for tests and benchmarks.

mod memory;
pub(crate) mod policy;
mod workspace;

pub use memory::MemoryFs;
pub use policy::PathPolicy;
pub use workspace::{WorkspaceError, WorkspaceFs};

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`FileAccess`] implementation.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The file does not exist. Previews treat this as "about to be created".
    #[error("File not found: {path}")]
    NotFound {
        /// Workspace-relative path.
        path: String,
    },

    /// The path resolves outside the workspace root.
    #[error("Path escapes the workspace root: {path}")]
    PathEscapesRoot {
        /// Workspace-relative path as supplied.
        path: String,
    },

    /// Any other storage failure (permissions, disk, races).
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Workspace-relative path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl AccessError {
    /// Whether this error only signals that the file is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Path the error refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::PathEscapesRoot { path } | Self::Io { path, .. } => {
                path
            }
        }
    }

    /// Maps an I/O error, folding `NotFound` into [`AccessError::NotFound`].
    pub(crate) fn from_io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_string(),
            }
        } else {
            Self::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}

/// Read/write access to the files of one workspace.
///
/// Paths are workspace-relative strings exactly as they appeared in the
/// pasted text.
#[async_trait]
pub trait FileAccess: Send + Sync {
    /// Reads the current content of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotFound`] when the file does not exist and
    /// another variant for any other failure.
    async fn read(&self, path: &str) -> Result<String, AccessError>;

    /// Writes `content` to `path`, creating parent directories and replacing
    /// whatever was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or one of its parents cannot be created.
    async fn write(&self, path: &str, content: &str) -> Result<(), AccessError>;
}
