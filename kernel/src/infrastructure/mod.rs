/// Audit logging for workspace writes.
pub mod audit;
/// Configuration management.
pub mod config;
/// HTTP server bootstrap.
pub mod server;
/// Logging setup.
pub mod telemetry;
