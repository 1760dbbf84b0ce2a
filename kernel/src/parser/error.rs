//! Format errors raised while parsing a block of `File:`/`Content:` text.

use thiserror::Error;

/// A mistake in the pasted text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The first non-blank line does not start with `File:`.
    #[error("Invalid format: text must start with a File: line")]
    MissingLeadingFile,

    /// A `File:` line carries no path.
    #[error("Syntax error at line {line}: file path cannot be empty")]
    EmptyPath {
        /// Line of the offending `File:` marker.
        line: usize,
    },

    /// A `File:` line is not directly followed by a `Content:` marker.
    #[error("Syntax error at line {line}: File: line must be immediately followed by Content:")]
    MissingContent {
        /// Line where the `Content:` marker was expected.
        line: usize,
    },

    /// The text contained no complete block.
    #[error("No File: blocks found. Please check the format.")]
    NoBlocks,
}

impl FormatError {
    /// Returns the line the error points at, when it points at one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::EmptyPath { line } | Self::MissingContent { line } => Some(*line),
            Self::MissingLeadingFile | Self::NoBlocks => None,
        }
    }
}
