//! Host-owned cache of the most recently previewed content.
//!
//! The diff view asks for "the proposed content of `path`" after the preview
//! list has been shown. The cache answers that without re-parsing.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::parser::FileSet;

/// Proposed content keyed by workspace-relative path.
#[derive(Debug, Default)]
pub struct PreviewCache {
    entries: RwLock<HashMap<String, String>>,
}

impl PreviewCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every entry.
    pub fn invalidate(&self) {
        self.entries.write().clear();
    }

    /// Replaces the cache contents with `files`.
    pub fn populate(&self, files: &FileSet) {
        let mut entries = self.entries.write();
        entries.clear();
        entries.extend(
            files
                .iter()
                .map(|(path, content)| (path.clone(), content.clone())),
        );
    }

    /// Proposed content for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<String> {
        self.entries.read().get(path).cloned()
    }

    /// Number of cached paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_replaces_previous_entries() {
        let cache = PreviewCache::new();
        cache.populate(&[("a", "1"), ("b", "2")].into_iter().collect());
        cache.populate(&[("c", "3")].into_iter().collect());

        assert_eq!(cache.len(), 1);
        assert!(cache.get("a").is_none());
        assert_eq!(cache.get("c").as_deref(), Some("3"));

        cache.invalidate();
        assert!(cache.is_empty());
    }
}
