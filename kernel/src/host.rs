//! Host layer between the editor front end and the core.
//!
//! `PasterHost` owns the preview cache and the workspace capability, turns
//! front-end requests into parser and reconciler calls, and reports outcomes
//! as [`HostResponse`] messages.

mod cache;
mod channel;
mod messages;

pub use cache::PreviewCache;
pub use channel::{ChannelError, HostHandle, spawn_host};
pub use messages::{HostRequest, HostResponse, NotifyLevel};

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::infrastructure::audit::{AuditEvent, log_audit};
use crate::parser::{self, FormatError};
use crate::reconcile::{self, ChangeRecord, ReconcileError};
use crate::vfs::FileAccess;

/// Errors surfaced by host operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// The pasted text is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// No workspace is open to resolve paths against.
    #[error("You must have a folder open in your workspace.")]
    NoWorkspace,

    /// Reading or writing a file failed.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// A diff was requested for a path that is not in the last preview.
    #[error("No previewed content for {path}")]
    NotPreviewed {
        /// Requested path.
        path: String,
    },

    /// A diff was requested for a file that does not exist yet.
    #[error("Cannot show diff for a new file.")]
    NewFile {
        /// Requested path.
        path: String,
    },
}

/// Outcome of [`PasterHost::update_files`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The pasted text contained no files; nothing was written.
    NothingToUpdate,
    /// This many files were written.
    Written(usize),
}

/// Original and proposed content of one previewed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffView {
    /// Workspace-relative path.
    pub path: String,
    /// Content on disk.
    pub original: String,
    /// Content from the last preview.
    pub proposed: String,
}

impl DiffView {
    /// Title for the diff editor.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} (Preview)", self.path)
    }
}

/// Coordinates parsing, previews, writes and the preview cache.
pub struct PasterHost {
    access: Option<Arc<dyn FileAccess>>,
    root_label: String,
    cache: PreviewCache,
}

impl std::fmt::Debug for PasterHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasterHost")
            .field("has_workspace", &self.access.is_some())
            .field("root", &self.root_label)
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl PasterHost {
    /// Creates a host over an open workspace. `root_label` identifies the
    /// workspace in logs and audit events.
    pub fn new(access: Arc<dyn FileAccess>, root_label: impl Into<String>) -> Self {
        Self {
            access: Some(access),
            root_label: root_label.into(),
            cache: PreviewCache::new(),
        }
    }

    /// Creates a host with no workspace open. Operations that touch files
    /// fail with [`HostError::NoWorkspace`].
    #[must_use]
    pub fn without_workspace() -> Self {
        Self {
            access: None,
            root_label: String::new(),
            cache: PreviewCache::new(),
        }
    }

    /// The preview cache.
    #[must_use]
    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    fn access(&self) -> Result<&dyn FileAccess, HostError> {
        self.access.as_deref().ok_or(HostError::NoWorkspace)
    }

    /// Parses `text`, refreshes the preview cache and describes the changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed, no workspace is open, or an
    /// existing file cannot be read.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub async fn preview_changes(&self, text: &str) -> Result<Vec<ChangeRecord>, HostError> {
        self.cache.invalidate();
        let files = parser::parse(text)?;
        self.cache.populate(&files);

        let records = reconcile::preview(&files, self.access()?).await?;
        debug!(records = records.len(), "Preview ready");
        Ok(records)
    }

    /// Parses `text` and writes every file it describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed, no workspace is open, or a
    /// write fails.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub async fn update_files(&self, text: &str) -> Result<UpdateOutcome, HostError> {
        self.cache.invalidate();
        let files = parser::parse(text)?;
        if files.is_empty() {
            return Ok(UpdateOutcome::NothingToUpdate);
        }

        match reconcile::apply(&files, self.access()?).await {
            Ok(count) => {
                log_audit(&AuditEvent::FilesWritten {
                    root: self.root_label.clone(),
                    count,
                });
                info!(count, "Files updated");
                Ok(UpdateOutcome::Written(count))
            }
            Err(e) => {
                log_audit(&AuditEvent::WriteFailed {
                    root: self.root_label.clone(),
                    path: e.path().to_string(),
                    reason: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    /// Pairs the on-disk content of `path` with its last previewed content.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::NotPreviewed`] when `path` was not in the last
    /// preview, [`HostError::NewFile`] when it does not exist on disk, and
    /// another variant when it cannot be read.
    #[instrument(skip(self))]
    pub async fn show_diff(&self, path: &str) -> Result<DiffView, HostError> {
        let access = self.access()?;
        let proposed = self.cache.get(path).ok_or_else(|| HostError::NotPreviewed {
            path: path.to_string(),
        })?;

        let original = match access.read(path).await {
            Ok(content) => content,
            Err(e) if e.is_not_found() => {
                return Err(HostError::NewFile {
                    path: path.to_string(),
                });
            }
            Err(e) => {
                return Err(ReconcileError::Read {
                    path: path.to_string(),
                    source: e,
                }
                .into());
            }
        };

        Ok(DiffView {
            path: path.to_string(),
            original,
            proposed,
        })
    }

    /// Handles one front-end message. Failures become notifications.
    pub async fn handle(&self, request: HostRequest) -> HostResponse {
        match request {
            HostRequest::PreviewChanges { text } => match self.preview_changes(&text).await {
                Ok(changes) => HostResponse::ShowPreview { changes },
                Err(e) => HostResponse::error(format!("Error parsing for preview: {e}")),
            },
            HostRequest::UpdateFiles { text } => match self.update_files(&text).await {
                Ok(UpdateOutcome::NothingToUpdate) => {
                    HostResponse::warning("No files to update. Check the input format.")
                }
                Ok(UpdateOutcome::Written(count)) => HostResponse::UpdateComplete {
                    count,
                    message: format!("Successfully created/updated {count} file(s)."),
                },
                Err(e) => HostResponse::error(format!("Error updating files: {e}")),
            },
            HostRequest::ShowDiff { file_path } => match self.show_diff(&file_path).await {
                Ok(view) => HostResponse::ShowDiff {
                    title: view.title(),
                    file_path: view.path,
                    original: view.original,
                    proposed: view.proposed,
                },
                Err(e @ HostError::NewFile { .. }) => HostResponse::info(e.to_string()),
                Err(e) => HostResponse::error(format!("Error showing diff: {e}")),
            },
        }
    }
}
