//! Change records produced by a preview.

use serde::{Deserialize, Serialize};

/// What applying a block would do to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    /// The file does not exist yet.
    Create,
    /// The file exists and will be overwritten.
    Modify,
}

impl ChangeAction {
    /// Short upper-case label used in listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "NEW",
            Self::Modify => "MODIFIED",
        }
    }
}

/// Preview of one file in a [`FileSet`](crate::parser::FileSet).
///
/// Serialised with the camelCase keys the editor front end consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    /// Workspace-relative path.
    #[serde(rename = "filePath")]
    pub path: String,
    /// Whether the file existed when the preview was taken.
    #[serde(rename = "fileExists")]
    pub exists: bool,
    /// Content on disk, empty for new files.
    pub old_content: String,
    /// Content the block will write.
    pub new_content: String,
    /// Create or modify.
    pub action: ChangeAction,
}

impl ChangeRecord {
    /// Number of `\n`-separated segments in the new content. Never zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        segment_count(&self.new_content)
    }

    /// Change in segment count for modifications, `None` for new files.
    #[must_use]
    pub fn line_delta(&self) -> Option<i64> {
        match self.action {
            ChangeAction::Create => None,
            ChangeAction::Modify => {
                let new = i64::try_from(self.line_count()).unwrap_or(i64::MAX);
                let old = i64::try_from(segment_count(&self.old_content)).unwrap_or(i64::MAX);
                Some(new - old)
            }
        }
    }

    /// Human readable size summary, e.g. `12 lines (+3)`.
    #[must_use]
    pub fn stats_label(&self) -> String {
        let lines = self.line_count();
        let mut label = if lines > 1 {
            format!("{lines} lines")
        } else {
            format!("{lines} line")
        };
        if let Some(delta) = self.line_delta() {
            if delta > 0 {
                label.push_str(&format!(" (+{delta})"));
            } else {
                label.push_str(&format!(" ({delta})"));
            }
        }
        label
    }
}

fn segment_count(content: &str) -> usize {
    content.split('\n').count()
}
