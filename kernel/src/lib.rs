//! Paster Kernel - turns pasted multi-file text into workspace changes.
//!
//! Text in the `File:`/`Content:` format is parsed into a [`parser::FileSet`],
//! compared against a workspace by [`reconcile`], and written through the
//! [`vfs::FileAccess`] capability. The [`host`] layer wraps these for an
//! editor front end, with [`api`] exposing it over HTTP.

/// HTTP bridge for editor front ends.
pub mod api;
/// Host layer: preview cache, messages and the request worker.
pub mod host;
/// Infrastructure components (config, server, telemetry).
pub mod infrastructure;
/// Block parser for pasted text.
pub mod parser;
/// Previewing and applying parsed files against a workspace.
pub mod reconcile;
/// File access capability and its implementations.
pub mod vfs;
