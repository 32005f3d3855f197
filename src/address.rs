//! Server address parsing.

use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Ports a server may be configured on. Well-known ports are rejected.
pub const PORT_RANGE: RangeInclusive<u16> = 1024..=65535;

/// Errors produced while parsing a [`ServerAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The port was missing its digits, malformed, or outside [`PORT_RANGE`].
    #[error("port must be an integer in [1024, 65535]")]
    InvalidPort,
}

/// A user-entered server address, split into host and optional port.
///
/// The host is kept as entered: an IPv4 literal, an IPv6 literal (brackets
/// and zone id stripped), or a hostname. Construct via [`FromStr`]:
///
/// ```
/// use mc_config_flow::ServerAddress;
///
/// let address: ServerAddress = "[2001:db8::1]:25565".parse().unwrap();
/// assert_eq!(address.host(), "2001:db8::1");
/// assert_eq!(address.port(), Some(25565));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    host: String,
    port: Option<u16>,
}

impl ServerAddress {
    /// The host, without brackets, zone id, or port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, if the user supplied one.
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl FromStr for ServerAddress {
    type Err = AddressError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        // `[<ipv6>]` or `[<ipv6>]:<port>`
        if let Some(rest) = raw.strip_prefix('[') {
            if let Some(end) = rest.find(']') {
                let host = strip_zone(&rest[..end]).to_string();
                let port = match &rest[end + 1..] {
                    "" => None,
                    after => match after.strip_prefix(':') {
                        Some(digits) => Some(parse_port(digits)?),
                        None => return Err(AddressError::InvalidPort),
                    },
                };
                return Ok(Self { host, port });
            }
        }

        match (raw.find(':'), raw.rfind(':')) {
            // Single colon: `<ipv4-or-hostname>:<port>`
            (Some(first), Some(last)) if first == last => Ok(Self {
                host: raw[..last].to_string(),
                port: Some(parse_port(&raw[last + 1..])?),
            }),
            // Multiple colons without brackets: a bare IPv6 literal
            (Some(_), Some(_)) => Ok(Self {
                host: strip_zone(raw).to_string(),
                port: None,
            }),
            _ => Ok(Self {
                host: raw.to_string(),
                port: None,
            }),
        }
    }
}

impl Display for ServerAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) if self.host.contains(':') => write!(f, "[{}]:{}", self.host, port),
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

fn parse_port(digits: &str) -> Result<u16, AddressError> {
    match digits.parse::<u16>() {
        Ok(port) if PORT_RANGE.contains(&port) => Ok(port),
        _ => Err(AddressError::InvalidPort),
    }
}

/// Zone ids are link-local routing hints, not part of the host shown to
/// the user.
fn strip_zone(literal: &str) -> &str {
    match literal.find('%') {
        Some(idx) => &literal[..idx],
        None => literal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ServerAddress {
        raw.parse().unwrap()
    }

    #[test]
    fn hostname_with_port() {
        let address = parse("mc.dummyserver.com:25565");
        assert_eq!(address.host(), "mc.dummyserver.com");
        assert_eq!(address.port(), Some(25565));
    }

    #[test]
    fn hostname_without_port() {
        let address = parse("dummyserver.com");
        assert_eq!(address.host(), "dummyserver.com");
        assert_eq!(address.port(), None);
    }

    #[test]
    fn ipv4_with_port() {
        let address = parse("1.1.1.1:25565");
        assert_eq!(address.host(), "1.1.1.1");
        assert_eq!(address.port(), Some(25565));
    }

    #[test]
    fn bracketed_ipv6_with_port() {
        let address = parse("[::ffff:0101:0101]:25565");
        assert_eq!(address.host(), "::ffff:0101:0101");
        assert_eq!(address.port(), Some(25565));
    }

    #[test]
    fn bracketed_ipv6_without_port() {
        let address = parse("[2001:db8::1]");
        assert_eq!(address.host(), "2001:db8::1");
        assert_eq!(address.port(), None);
    }

    #[test]
    fn bare_ipv6_is_host_only() {
        let address = parse("2001:db8::1:25565");
        assert_eq!(address.host(), "2001:db8::1:25565");
        assert_eq!(address.port(), None);
    }

    #[test]
    fn zone_id_is_stripped() {
        assert_eq!(parse("fe80::1%eth0").host(), "fe80::1");
        assert_eq!(parse("[fe80::1%eth0]:25565").host(), "fe80::1");
    }

    #[test]
    fn port_below_range() {
        for raw in ["mc.dummyserver.com:1023", "1.1.1.1:1023", "[::1]:1023"] {
            assert_eq!(
                raw.parse::<ServerAddress>(),
                Err(AddressError::InvalidPort),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn port_above_range() {
        for raw in ["mc.dummyserver.com:65536", "[::1]:65536"] {
            assert_eq!(
                raw.parse::<ServerAddress>(),
                Err(AddressError::InvalidPort),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn port_boundaries_accepted() {
        assert_eq!(parse("host:1024").port(), Some(1024));
        assert_eq!(parse("host:65535").port(), Some(65535));
    }

    #[test]
    fn malformed_port() {
        assert_eq!(
            "mc.dummyserver.com:".parse::<ServerAddress>(),
            Err(AddressError::InvalidPort)
        );
        assert_eq!(
            "mc.dummyserver.com:abc".parse::<ServerAddress>(),
            Err(AddressError::InvalidPort)
        );
        assert_eq!(
            "[::1]garbage".parse::<ServerAddress>(),
            Err(AddressError::InvalidPort)
        );
    }

    #[test]
    fn display_rebrackets_ipv6() {
        assert_eq!(parse("[::1]:25565").to_string(), "[::1]:25565");
        assert_eq!(parse("mc.dummyserver.com:25565").to_string(), "mc.dummyserver.com:25565");
        assert_eq!(parse("2001:db8::1").to_string(), "2001:db8::1");
    }
}
