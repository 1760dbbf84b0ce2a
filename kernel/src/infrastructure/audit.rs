use serde::Serialize;
use tracing::{info, info_span};

/// Domain event for audit logging.
/// Structured for JSON serialization to enable machine-readable audit trails.
#[derive(Debug, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum AuditEvent {
    /// The HTTP bridge bound its listener.
    ServerStartup {
        /// Bound socket address.
        address: String,
        /// Configured workspace root, if any.
        root: Option<String>,
    },
    /// An apply wrote every file in a paste.
    FilesWritten {
        /// Workspace the files were written to.
        root: String,
        /// Number of files written.
        count: usize,
    },
    /// An apply stopped at a file it could not write.
    WriteFailed {
        /// Workspace being written to.
        root: String,
        /// Workspace-relative path that failed.
        path: String,
        /// Error text.
        reason: String,
    },
}

/// Logs an audit event to the dedicated audit channel as structured JSON.
/// This uses a specific `target` which can be filtered by the subscriber to redirect to a secure file.
pub fn log_audit(event: &AuditEvent) {
    let span = info_span!(target: "audit", "audit_event");
    let _enter = span.enter();

    let json = serde_json::to_string(event).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
    info!(target: "audit", audit_json = %json, "Workspace Audit Event");
}
