//! Once-per-process cache of a persisted catalog.

use dohcat_core::{read_catalog, Catalog, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Loads a persisted catalog on first use and hands out the same copy after.
///
/// A failed load leaves the cache empty so the next call tries again.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    cell: OnceCell<Arc<Catalog>>,
}

impl CatalogCache {
    /// Create an empty cache for the catalog at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Path the catalog is loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the catalog if it has been loaded
    #[must_use]
    pub fn get(&self) -> Option<Arc<Catalog>> {
        self.cell.get().cloned()
    }

    /// Returns true once a load has succeeded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Load the catalog if needed and return it
    pub async fn get_or_load(&self) -> Result<Arc<Catalog>> {
        self.cell
            .get_or_try_init(|| async {
                debug!(path = %self.path.display(), "loading catalog");
                read_catalog(&self.path).map(Arc::new)
            })
            .await
            .cloned()
    }
}
