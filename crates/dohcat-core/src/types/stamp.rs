use serde::{Deserialize, Serialize};

/// Protocol id of a DNS-over-HTTPS stamp
pub const PROTOCOL_DOH: u8 = 0x02;

/// Path used when a DoH stamp leaves it empty
pub const DEFAULT_DOH_PATH: &str = "/dns-query";

/// Decoded contents of one `sdns://` stamp.
///
/// Only DoH stamps carry more than the protocol id; for any other protocol
/// the remaining fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampDescriptor {
    /// Stamp protocol id
    pub protocol: u8,

    /// Raw little-endian properties word (DoH only, not interpreted)
    #[serde(default)]
    pub props: u64,

    /// Optional literal `ip` or `ip:port` hint
    #[serde(default)]
    pub address: String,

    /// TLS server name / HTTP host
    #[serde(default)]
    pub hostname: String,

    /// HTTP path
    #[serde(default)]
    pub path: String,
}

impl StampDescriptor {
    /// Descriptor for a stamp of another protocol
    #[must_use]
    pub const fn other(protocol: u8) -> Self {
        Self {
            protocol,
            props: 0,
            address: String::new(),
            hostname: String::new(),
            path: String::new(),
        }
    }

    /// Returns true for DoH stamps
    #[must_use]
    pub const fn is_doh(&self) -> bool {
        self.protocol == PROTOCOL_DOH
    }

    /// Endpoint URL, if this is a DoH stamp with a hostname
    #[must_use]
    pub fn doh_url(&self) -> Option<String> {
        if !self.is_doh() || self.hostname.is_empty() {
            return None;
        }
        let path = if self.path.is_empty() {
            DEFAULT_DOH_PATH
        } else {
            &self.path
        };
        Some(crate::ResolverEndpoint::doh_url(&self.hostname, path))
    }
}

/// A stamp line together with the section it appeared under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampEntry {
    /// Resolver name from the enclosing `## ` header
    pub name: String,
    /// The trimmed `sdns://` line
    pub stamp: String,
}

impl StampEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(name: impl Into<String>, stamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stamp: stamp.into(),
        }
    }
}
