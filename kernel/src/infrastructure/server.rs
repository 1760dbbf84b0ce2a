use crate::api::{ApiState, routes};
use crate::infrastructure::audit::{AuditEvent, log_audit};
use crate::infrastructure::config::Settings;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Binds the configured address and serves the HTTP bridge until the
/// process is stopped.
///
/// # Errors
///
/// Returns an error if the address is invalid, cannot be bound, or the
/// server fails while running.
pub async fn run_server(config: &Settings, state: ApiState) -> anyhow::Result<()> {
    let addr_str = format!("{}:{}", config.server.host, config.server.port);
    let addr: SocketAddr = addr_str.parse()?;

    let listener = TcpListener::bind(addr).await?;
    log_audit(&AuditEvent::ServerStartup {
        address: addr.to_string(),
        root: config
            .workspace
            .root
            .as_ref()
            .map(|p| p.display().to_string()),
    });

    serve(listener, state).await
}

/// Serves the HTTP bridge on an already bound listener.
///
/// # Errors
///
/// Returns an error if the server fails while running.
pub async fn serve(listener: TcpListener, state: ApiState) -> anyhow::Result<()> {
    tracing::info!("Paster bridge listening on {}", listener.local_addr()?);
    axum::serve(listener, routes(state)).await?;
    Ok(())
}
