//! In-memory file access.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::{AccessError, FileAccess};

#[derive(Debug, Default)]
struct MemoryFsInner {
    files: HashMap<String, String>,
    failing_reads: HashSet<String>,
    failing_writes: HashSet<String>,
    writes: usize,
}

/// [`FileAccess`] backed by a map. Clones share the same files.
///
/// Reads and writes can be made to fail for chosen paths, which is how the
/// abort behaviour of previews and applies is exercised without touching
/// real permissions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    inner: Arc<RwLock<MemoryFsInner>>,
}

impl MemoryFs {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `files`.
    #[must_use]
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let fs = Self::new();
        {
            let mut inner = fs.inner.write();
            for (path, content) in files {
                inner.files.insert(path.into(), content.into());
            }
        }
        fs
    }

    /// Makes every read of `path` fail with a permission error.
    pub fn fail_reads_of(&self, path: impl Into<String>) {
        self.inner.write().failing_reads.insert(path.into());
    }

    /// Makes every write of `path` fail with a permission error.
    pub fn fail_writes_of(&self, path: impl Into<String>) {
        self.inner.write().failing_writes.insert(path.into());
    }

    /// Current content of `path`, bypassing failure injection.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<String> {
        self.inner.read().files.get(path).cloned()
    }

    /// Number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().files.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().files.is_empty()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.read().writes
    }
}

fn permission_denied(path: &str) -> AccessError {
    AccessError::Io {
        path: path.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
    }
}

#[async_trait]
impl FileAccess for MemoryFs {
    async fn read(&self, path: &str) -> Result<String, AccessError> {
        let inner = self.inner.read();
        if inner.failing_reads.contains(path) {
            return Err(permission_denied(path));
        }
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| AccessError::NotFound {
                path: path.to_string(),
            })
    }

    async fn write(&self, path: &str, content: &str) -> Result<(), AccessError> {
        let mut inner = self.inner.write();
        if inner.failing_writes.contains(path) {
            return Err(permission_denied(path));
        }
        inner.files.insert(path.to_string(), content.to_string());
        inner.writes += 1;
        Ok(())
    }
}
