//! Catalog persistence.

use crate::{Catalog, CatalogError, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `catalog` to `path` as indented JSON.
///
/// The file is written to a temporary sibling and renamed into place, so
/// readers see either the old catalog or the complete new one.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let write_err = |source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(write_err)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!(path = %path.display(), endpoints = catalog.len(), "wrote catalog");
    Ok(())
}

/// Load a persisted catalog.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResolverEndpoint;

    fn sample() -> Catalog {
        let mut curated = ResolverEndpoint::new("Curated", "https://a.example/dns-query")
            .with_ip_hint("192.0.2.1");
        curated.no_logs = Some(false);
        Catalog::from(vec![
            curated,
            ResolverEndpoint::new("Decoded", "https://b.example/dns-query"),
        ])
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("public").join("servers.json");

        write_catalog(&sample(), &path).unwrap();
        let loaded = read_catalog(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_output_is_indented_with_stable_field_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("servers.json");
        write_catalog(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"name\": \"Curated\""));
        let name = text.find("\"name\"").unwrap();
        let url = text.find("\"url\"").unwrap();
        let method = text.find("\"requestMethod\"").unwrap();
        let hints = text.find("\"ipHints\"").unwrap();
        assert!(name < url && url < method && method < hints);
        assert!(text.contains("\"noLogs\": false"));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_write_replaces_previous_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("servers.json");
        std::fs::write(&path, "stale").unwrap();

        write_catalog(&Catalog::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
        // No temp files left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_catalog(Path::new("/nonexistent/dohcat/servers.json")).unwrap_err();
        assert_eq!(err.stage(), "read");
    }
}
