//! Curated base catalog compiled into the crate.

use crate::{Catalog, CatalogError, Result};

const BASE_SERVERS: &str = include_str!("../data/base_servers.json");

/// Parse the curated base catalog.
///
/// Blank address hints in the seed are dropped on load.
pub fn base_catalog() -> Result<Catalog> {
    let catalog: Catalog =
        serde_json::from_str(BASE_SERVERS).map_err(|e| CatalogError::Seed(e.to_string()))?;

    Ok(catalog
        .into_iter()
        .map(|mut endpoint| {
            endpoint.sanitize_ip_hints();
            endpoint
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_catalog_loads() {
        let catalog = base_catalog().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|e| e.url.starts_with("https://")));
        assert!(catalog.iter().all(|e| !e.ip_hints.contains("")));
    }

    #[test]
    fn test_base_catalog_urls_unique() {
        let catalog = base_catalog().unwrap();
        let urls: HashSet<_> = catalog.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls.len(), catalog.len());
    }

    #[test]
    fn test_base_catalog_is_curated() {
        let catalog = base_catalog().unwrap();
        let cloudflare = catalog.get("https://cloudflare-dns.com/dns-query").unwrap();
        assert_eq!(cloudflare.no_logs, Some(true));
        assert!(cloudflare.ip_hints.contains("1.1.1.1"));
    }
}
