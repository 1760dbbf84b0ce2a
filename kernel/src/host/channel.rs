//! Message channel in front of a [`PasterHost`].
//!
//! A single worker task owns the host and answers requests strictly in
//! arrival order, so no two previews or applies ever run at the same time.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::{HostRequest, HostResponse, PasterHost};

const CHANNEL_CAPACITY: usize = 32;

/// Errors talking to the host worker.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The worker has shut down.
    #[error("Host worker is not running")]
    Closed,
    /// The worker dropped the request without answering.
    #[error("Host worker dropped the request")]
    NoReply,
}

struct Envelope {
    request: HostRequest,
    reply_tx: oneshot::Sender<HostResponse>,
}

/// Cloneable sender side of the host channel.
#[derive(Clone)]
pub struct HostHandle {
    sender: mpsc::Sender<Envelope>,
    host: Arc<PasterHost>,
}

impl std::fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandle")
            .field("closed", &self.sender.is_closed())
            .finish_non_exhaustive()
    }
}

impl HostHandle {
    /// Sends `request` and waits for the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is gone.
    pub async fn request(&self, request: HostRequest) -> Result<HostResponse, ChannelError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(Envelope { request, reply_tx })
            .await
            .map_err(|_| ChannelError::Closed)?;
        reply_rx.await.map_err(|_| ChannelError::NoReply)
    }

    /// Proposed content of `path` from the last preview.
    ///
    /// Reads the cache directly; it never touches the workspace.
    #[must_use]
    pub fn previewed_content(&self, path: &str) -> Option<String> {
        self.host.cache().get(path)
    }
}

/// Starts the worker task for `host` and returns a handle to it.
///
/// The worker stops once every handle has been dropped.
pub fn spawn_host(host: PasterHost) -> HostHandle {
    let host = Arc::new(host);
    let (sender, mut receiver) = mpsc::channel::<Envelope>(CHANNEL_CAPACITY);
    let worker_host = Arc::clone(&host);

    tokio::spawn(async move {
        while let Some(Envelope { request, reply_tx }) = receiver.recv().await {
            debug!(?request, "Handling host request");
            let response = worker_host.handle(request).await;
            if reply_tx.send(response).is_err() {
                debug!("Requester went away before the reply");
            }
        }
        info!("Host worker stopped");
    });

    HostHandle { sender, host }
}
