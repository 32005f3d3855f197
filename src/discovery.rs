//! Endpoint discovery for addresses entered without an explicit port.

use crate::{resolver::SrvResolver, ServerAddress, SrvRecord};
use std::fmt::{self, Display, Formatter};

/// Default port of a Minecraft Java Edition server.
pub const DEFAULT_PORT: u16 = 25565;

/// Service and protocol labels prepended to the host for SRV discovery.
pub const SRV_SERVICE: &str = "_minecraft._tcp";

/// The effective host and port to probe, derived from a [`ServerAddress`]
/// after optional SRV discovery. Always carries a concrete port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host to connect to.
    pub host: String,
    /// Port to connect to.
    pub port: u16,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Resolves the endpoint to probe for `address`.
///
/// Addresses with an explicit port are returned as-is, without touching
/// DNS. For the rest, a SRV lookup of `_minecraft._tcp.<host>` may
/// redirect to a canonical target; on lookup failure or an empty answer
/// the original host is kept with [`DEFAULT_PORT`]. Resolution failures
/// are absorbed here and never surface to the user.
pub async fn resolve_endpoint<R: SrvResolver>(resolver: &R, address: &ServerAddress) -> Endpoint {
    let host = address.host();
    if let Some(port) = address.port() {
        return Endpoint {
            host: host.to_string(),
            port,
        };
    }

    let srv = format!("{}.{}", SRV_SERVICE, host);
    match resolver.srv_records(&srv).await {
        Ok(records) => match records.first() {
            Some(record) => {
                let endpoint = record.endpoint();
                #[cfg(feature = "log")]
                tracing::debug!(srv = %srv, target = %endpoint, "using SRV target");
                endpoint
            }
            None => {
                #[cfg(feature = "log")]
                tracing::debug!(srv = %srv, "SRV answer empty, using default port");
                Endpoint {
                    host: host.to_string(),
                    port: DEFAULT_PORT,
                }
            }
        },
        Err(_error) => {
            #[cfg(feature = "log")]
            tracing::debug!(srv = %srv, error = %_error, "SRV lookup failed, using default port");
            Endpoint {
                host: host.to_string(),
                port: DEFAULT_PORT,
            }
        }
    }
}
