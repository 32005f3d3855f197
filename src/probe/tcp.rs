//! Reachability probe backed by a plain TCP connect.

use super::StatusProbe;
use crate::Endpoint;
use async_trait::async_trait;
use std::time::Duration;
use tokio::{
    net::TcpStream,
    time::{timeout, Instant},
};

/// Errors encountered by [`TcpProbe`].
#[derive(Debug, thiserror::Error)]
pub enum TcpProbeError {
    /// The connection attempt failed.
    #[error("connect: {0}")]
    Connect(#[from] std::io::Error),
    /// The connection attempt did not complete in time.
    #[error("connect timed out after {0:?}")]
    Timeout(Duration),
}

/// Probe that checks reachability with a single TCP connect, reporting the
/// connect latency as its status payload.
///
/// This backend does not speak the status protocol and cannot tell a
/// Minecraft server apart from anything else listening on the port.
/// Integrations that need a full status payload implement [`StatusProbe`]
/// on their own client instead.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    timeout: Duration,
}

impl TcpProbe {
    /// Creates a probe with a specific connect timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl StatusProbe for TcpProbe {
    type Status = Duration;
    type Error = TcpProbeError;

    async fn status(&self, endpoint: &Endpoint) -> Result<Self::Status, Self::Error> {
        let start = Instant::now();
        let connect = TcpStream::connect((endpoint.host.as_str(), endpoint.port));
        let stream = timeout(self.timeout, connect)
            .await
            .map_err(|_| TcpProbeError::Timeout(self.timeout))??;
        drop(stream);
        Ok(start.elapsed())
    }
}
