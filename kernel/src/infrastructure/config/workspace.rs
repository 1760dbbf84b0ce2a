//! Workspace configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Where pasted files are resolved and how far they may reach.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkspaceSettings {
    /// Workspace root. `None` means no workspace is open.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Reject paths that are absolute or climb above the root.
    #[serde(default = "default_confine")]
    pub confine_to_root: bool,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            root: None,
            confine_to_root: default_confine(),
        }
    }
}

fn default_confine() -> bool {
    true
}
