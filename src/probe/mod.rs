//! Server status probes.
//!
//! A probe performs exactly one status query against an [`Endpoint`]. The
//! flow treats any `Ok` payload as proof of reachability, including
//! error-shaped payloads from the server itself (the server had to answer
//! to produce them), and any `Err` as a connection failure.

use crate::Endpoint;
use async_trait::async_trait;

#[cfg(feature = "tcp")]
mod tcp;
#[cfg(feature = "tcp")]
pub use tcp::{TcpProbe, TcpProbeError};

/// Represents the ability to query a server for its status.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Status payload produced by a successful query.
    type Status: Send;

    /// Errors encountered during a status query.
    type Error: std::error::Error + Send + 'static;

    /// Performs a single status query against `endpoint`. No retries.
    async fn status(&self, endpoint: &Endpoint) -> Result<Self::Status, Self::Error>;
}
