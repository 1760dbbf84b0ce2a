//! HTTP bridge for front-end messages.
//!
//! The editor front end posts the same messages it would send over a
//! webview channel; responses mirror what the host would post back.

pub mod handlers;
pub mod routes;
pub mod types;

pub use handlers::ApiError;
pub use routes::{ApiState, routes};
pub use types::HealthResponse;
