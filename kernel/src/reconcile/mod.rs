//! Reconciliation of a parsed [`FileSet`] against a workspace.
//!
//! Both operations walk the set in order, one file at a time, and stop at
//! the first failure. There is no partial result: a preview either lists
//! every file or fails, and an apply either writes every file or reports the
//! path that failed (files written before it stay written).

mod record;
mod report;

pub use record::{ChangeAction, ChangeRecord};
pub use report::PreviewReport;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::parser::FileSet;
use crate::vfs::{AccessError, FileAccess};

/// Failures while previewing or applying a [`FileSet`].
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Reading an existing file failed for a reason other than absence.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path being previewed.
        path: String,
        /// Underlying error.
        #[source]
        source: AccessError,
    },

    /// Writing a file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path being written.
        path: String,
        /// Underlying error.
        #[source]
        source: AccessError,
    },
}

impl ReconcileError {
    /// Path of the file that failed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Describes what applying `files` would do.
///
/// Returns one record per path in set order. A missing file becomes a
/// [`ChangeAction::Create`] record with empty old content.
///
/// # Errors
///
/// Returns [`ReconcileError::Read`] as soon as a read fails for any reason
/// other than the file being absent.
#[instrument(skip_all, fields(files = files.len()))]
pub async fn preview(
    files: &FileSet,
    access: &dyn FileAccess,
) -> Result<Vec<ChangeRecord>, ReconcileError> {
    let mut records = Vec::with_capacity(files.len());

    for (path, content) in files {
        let (exists, old_content) = match access.read(path).await {
            Ok(existing) => (true, existing),
            Err(e) if e.is_not_found() => (false, String::new()),
            Err(e) => {
                warn!(%path, error = %e, "Preview aborted");
                return Err(ReconcileError::Read {
                    path: path.clone(),
                    source: e,
                });
            }
        };

        let action = if exists {
            ChangeAction::Modify
        } else {
            ChangeAction::Create
        };
        debug!(%path, ?action, "Previewed file");

        records.push(ChangeRecord {
            path: path.clone(),
            exists,
            old_content,
            new_content: content.clone(),
            action,
        });
    }

    Ok(records)
}

/// Writes every file in `files`, overwriting unconditionally.
///
/// Returns the number of files written. Applying the same set twice leaves
/// the workspace in the same state and reports the same count.
///
/// # Errors
///
/// Returns [`ReconcileError::Write`] naming the first path that could not be
/// written. Earlier writes are not rolled back.
#[instrument(skip_all, fields(files = files.len()))]
pub async fn apply(files: &FileSet, access: &dyn FileAccess) -> Result<usize, ReconcileError> {
    let mut written = 0;

    for (path, content) in files {
        if let Err(e) = access.write(path, content).await {
            warn!(%path, written, error = %e, "Apply aborted");
            return Err(ReconcileError::Write {
                path: path.clone(),
                source: e,
            });
        }
        debug!(%path, bytes = content.len(), "Wrote file");
        written += 1;
    }

    info!(written, "Applied file set");
    Ok(written)
}
