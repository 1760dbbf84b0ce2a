//! Messages exchanged between the editor front end and the host.
//!
//! Both directions are tagged by a `command` field and use camelCase keys.

use serde::{Deserialize, Serialize};

use crate::reconcile::ChangeRecord;

/// A request from the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostRequest {
    /// Parse `text` and describe the changes it would make.
    PreviewChanges {
        /// Pasted text.
        text: String,
    },
    /// Parse `text` and write every file.
    UpdateFiles {
        /// Pasted text.
        text: String,
    },
    /// Show original and proposed content of a previewed file.
    #[serde(rename_all = "camelCase")]
    ShowDiff {
        /// Workspace-relative path from the last preview.
        file_path: String,
    },
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    /// Informational toast.
    Info,
    /// Something the user should look at; nothing was changed.
    Warning,
    /// The operation failed.
    Error,
}

/// A response to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostResponse {
    /// Preview list for the pasted text.
    ShowPreview {
        /// One record per file, in paste order.
        changes: Vec<ChangeRecord>,
    },
    /// All files were written.
    UpdateComplete {
        /// Number of files written.
        count: usize,
        /// Summary for a toast.
        message: String,
    },
    /// Both sides of a diff view.
    #[serde(rename_all = "camelCase")]
    ShowDiff {
        /// Workspace-relative path.
        file_path: String,
        /// Content on disk.
        original: String,
        /// Content from the last preview.
        proposed: String,
        /// Title for the diff editor.
        title: String,
    },
    /// A toast-style notification.
    Notify {
        /// Severity.
        level: NotifyLevel,
        /// Text shown to the user.
        message: String,
    },
}

impl HostResponse {
    /// Builds an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::Notify {
            level: NotifyLevel::Info,
            message: message.into(),
        }
    }

    /// Builds a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Notify {
            level: NotifyLevel::Warning,
            message: message.into(),
        }
    }

    /// Builds an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify {
            level: NotifyLevel::Error,
            message: message.into(),
        }
    }
}
