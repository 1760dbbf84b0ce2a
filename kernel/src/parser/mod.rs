//! Block parser for pasted multi-file text.
//!
//! The accepted format is line oriented:
//!
//! ```text
//! File: src/lib.rs
//! Content:
//! pub fn hello() {}
//! File: README.md
//! Content:
//! # Hello
//! ```
//!
//! Only a line that *starts* with `File:` opens a block, so content lines may
//! mention `File:` anywhere else. Everything between a `Content:` marker and
//! the next block (or end of input) is kept verbatim.

mod error;
mod file_set;

pub use error::FormatError;
pub use file_set::FileSet;

use tracing::{debug, trace};

/// Marker that opens a block.
pub const FILE_MARKER: &str = "File:";
/// Marker that must directly follow a `File:` line.
pub const CONTENT_MARKER: &str = "Content:";

/// Parses pasted text into a [`FileSet`].
///
/// Blank input yields an empty set. `\r\n` line endings are accepted and
/// normalised to `\n` in block content.
///
/// # Errors
///
/// Returns a [`FormatError`] when the first non-blank line is not a `File:`
/// line, a path is empty, a `File:` line lacks its `Content:` marker, or no
/// block was found.
pub fn parse(text: &str) -> Result<FileSet, FormatError> {
    if text.trim().is_empty() {
        return Ok(FileSet::new());
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let starts_with_file = lines
        .iter()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| line.starts_with(FILE_MARKER));
    if !starts_with_file {
        return Err(FormatError::MissingLeadingFile);
    }

    let mut files = FileSet::new();
    let mut current: Option<(&str, Vec<&str>)> = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(rest) = line.strip_prefix(FILE_MARKER) {
            if let Some((path, content)) = current.take() {
                commit(&mut files, path, &content);
            }

            let path = rest.trim();
            if path.is_empty() {
                return Err(FormatError::EmptyPath { line: i + 1 });
            }

            match lines.get(i + 1) {
                Some(next) if next.starts_with(CONTENT_MARKER) => {
                    current = Some((path, Vec::new()));
                    i += 2;
                    continue;
                }
                _ => return Err(FormatError::MissingContent { line: i + 2 }),
            }
        }

        if let Some((_, content)) = current.as_mut() {
            content.push(line);
        }
        i += 1;
    }

    if let Some((path, content)) = current.take() {
        commit(&mut files, path, &content);
    }

    if files.is_empty() {
        return Err(FormatError::NoBlocks);
    }

    debug!(files = files.len(), "Parsed file blocks");
    Ok(files)
}

fn commit(files: &mut FileSet, path: &str, content: &[&str]) {
    let replaced = files.insert(path, content.join("\n"));
    if replaced.is_some() {
        trace!(path, "Duplicate block, later content wins");
    }
}
