//! The parsed mapping from file path to intended content.

use indexmap::IndexMap;

/// Unique paths mapped to content.
///
/// Iteration follows the order in which a path was first seen. Inserting a
/// path that is already present replaces its content in place, so the last
/// block for a path wins without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: IndexMap<String, String>,
}

impl FileSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a block, returning the content it replaced if the path was
    /// already present.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.files.insert(path.into(), content.into())
    }

    /// Content for `path`, if present.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Number of distinct paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the set holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates `(path, content)` pairs in first-seen order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.files.iter()
    }

    /// Paths in first-seen order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for FileSet {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(path, content)| (path.into(), content.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = FileSet::new();
        assert!(set.insert("a.txt", "one").is_none());
        set.insert("b.txt", "two");
        assert_eq!(set.insert("a.txt", "three"), Some("one".to_string()));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a.txt"), Some("three"));
        assert_eq!(set.paths().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_from_iter() {
        let set: FileSet = [("x", "foo"), ("y", "bar")].into_iter().collect();
        assert_eq!(set.get("y"), Some("bar"));
        assert!(set.get("z").is_none());
        assert!(!set.is_empty());
    }

    #[test]
    fn test_collect_keeps_first_position_and_last_content() {
        let set: FileSet = [("a.txt", "first"), ("b", "b"), ("a.txt", "last")]
            .into_iter()
            .collect();

        let pairs: Vec<(&str, &str)> = set.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
        assert_eq!(pairs, vec![("a.txt", "last"), ("b", "b")]);
    }
}
