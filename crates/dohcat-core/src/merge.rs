//! Combining the curated base catalog with decoded entries.

use crate::{Catalog, ResolverEndpoint};
use std::collections::HashMap;
use tracing::debug;

/// Merge `extra` into `base`, keyed by URL.
///
/// Base entries come first in their original order, then new entries from
/// `extra` in their order. When a URL exists in both, only the address
/// hints are unioned; every other field of the base entry is kept. Entries
/// with an empty URL are dropped from both inputs, and blank hints never
/// reach the output.
pub fn merge_catalogs(base: &Catalog, extra: &Catalog) -> Catalog {
    let mut merged: Vec<ResolverEndpoint> = Vec::with_capacity(base.len() + extra.len());
    let mut by_url: HashMap<&str, usize> = HashMap::new();

    for endpoint in base.iter().chain(extra.iter()) {
        if endpoint.url.is_empty() {
            continue;
        }

        if let Some(&idx) = by_url.get(endpoint.url.as_str()) {
            let existing = &mut merged[idx];
            existing.ip_hints.extend(endpoint.ip_hints.iter().cloned());
            existing.sanitize_ip_hints();
            debug!(url = %endpoint.url, name = %endpoint.name, "merged duplicate endpoint");
        } else {
            by_url.insert(endpoint.url.as_str(), merged.len());
            let mut fresh = endpoint.clone();
            fresh.sanitize_ip_hints();
            merged.push(fresh);
        }
    }

    Catalog::from(merged)
}
