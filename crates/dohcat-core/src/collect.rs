//! Folding decoded stamps into endpoints.

use crate::{decode_stamp, Catalog, ResolverEndpoint, StampEntry};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Per-run counters for the decode pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Stamp lines examined
    pub stamps: usize,
    /// DoH stamps that produced or extended an endpoint
    pub decoded: usize,
    /// Stamps for other protocols
    pub non_doh: usize,
    /// DoH stamps without a hostname
    pub missing_hostname: usize,
    /// Stamps that failed to decode
    pub malformed: usize,
    /// DoH stamps whose URL was already seen
    pub duplicates: usize,
}

/// Decode every entry and build one endpoint per distinct URL.
///
/// The first section name seen for a URL wins; later stamps for the same
/// URL only add their address hint. Nothing here is fatal.
pub fn collect_endpoints(entries: &[StampEntry]) -> (Catalog, DecodeStats) {
    let mut stats = DecodeStats {
        stamps: entries.len(),
        ..DecodeStats::default()
    };
    let mut endpoints: Vec<ResolverEndpoint> = Vec::new();
    let mut by_url: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let descriptor = match decode_stamp(&entry.stamp) {
            Ok(d) => d,
            Err(e) => {
                stats.malformed += 1;
                debug!(resolver = %entry.name, error = %e, "skipping malformed stamp");
                continue;
            }
        };

        if !descriptor.is_doh() {
            stats.non_doh += 1;
            continue;
        }

        let Some(url) = descriptor.doh_url() else {
            stats.missing_hostname += 1;
            continue;
        };

        stats.decoded += 1;
        match by_url.get(&url) {
            Some(&idx) => {
                stats.duplicates += 1;
                endpoints[idx].add_ip_hint(descriptor.address);
            }
            None => {
                let endpoint =
                    ResolverEndpoint::new(&entry.name, url.clone()).with_ip_hint(descriptor.address);
                by_url.insert(url, endpoints.len());
                endpoints.push(endpoint);
            }
        }
    }

    info!(
        stamps = stats.stamps,
        endpoints = endpoints.len(),
        non_doh = stats.non_doh,
        malformed = stats.malformed,
        "decoded resolver stamps"
    );

    (Catalog::from(endpoints), stats)
}
