//! Root confinement policy for workspace paths.
//!
//! Pasted paths are passed through the parser untouched, so `../x` or
//! `/etc/x` can reach the capability. When confinement is on, such paths are
//! rejected before any filesystem call is made.

use std::path::{Component, Path, PathBuf};

use super::AccessError;

/// Decides whether a workspace-relative path may be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPolicy {
    confine_to_root: bool,
}

impl PathPolicy {
    /// A policy that rejects paths leaving the workspace root.
    #[must_use]
    pub fn confined() -> Self {
        Self {
            confine_to_root: true,
        }
    }

    /// A policy that resolves every path as given.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self {
            confine_to_root: false,
        }
    }

    /// Builds a policy from the `workspace.confine_to_root` setting.
    #[must_use]
    pub fn from_setting(confine_to_root: bool) -> Self {
        Self { confine_to_root }
    }

    /// Whether paths are confined to the root.
    #[must_use]
    pub fn is_confined(&self) -> bool {
        self.confine_to_root
    }

    /// Resolves `relative` against `root`.
    ///
    /// The check is lexical: `a/../b` is fine, `a/../../b` is not. Symlinks
    /// inside the workspace are followed by the OS as usual.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::PathEscapesRoot`] when confinement is on and
    /// the path is absolute or climbs above the root.
    pub fn resolve(&self, root: &Path, relative: &str) -> Result<PathBuf, AccessError> {
        let path = Path::new(relative);

        if self.confine_to_root && escapes_root(path) {
            return Err(AccessError::PathEscapesRoot {
                path: relative.to_string(),
            });
        }

        Ok(root.join(path))
    }
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self::confined()
    }
}

fn escapes_root(path: &Path) -> bool {
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return true,
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return true,
            },
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
        }
    }
    false
}
