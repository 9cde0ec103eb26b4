//! End-to-end catalog build: fetch, parse, decode, merge, write.

use dohcat_client::{source_url_from_env, DocumentSource, FetchConfig, DEFAULT_SOURCE_URL};
use dohcat_core::{
    base_catalog, collect_endpoints, merge_catalogs, parse_resolver_list, write_catalog, Catalog,
    DecodeStats, Result,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where the merged catalog is written unless overridden
pub const DEFAULT_OUTPUT_PATH: &str = "public/servers.json";

/// Settings for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Resolver list document URL
    pub source_url: String,

    /// Destination of the persisted catalog
    pub output_path: PathBuf,

    /// HTTP settings for the download
    pub fetch: FetchConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            fetch: FetchConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Defaults with the source URL taken from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            source_url: source_url_from_env(),
            ..Self::default()
        }
    }
}

/// Summary of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// URL the list was downloaded from
    pub source_url: String,
    /// Decode pass counters
    pub decode: DecodeStats,
    /// Entries in the curated base catalog
    pub base_entries: usize,
    /// Distinct endpoints produced by the decode pass
    pub decoded_entries: usize,
    /// Entries in the merged catalog
    pub merged_entries: usize,
    /// Where the catalog was written, if it was
    pub output_path: Option<PathBuf>,
}

/// A merged catalog that has not been persisted yet
#[derive(Debug, Clone)]
pub struct BuiltCatalog {
    /// The merged catalog
    pub catalog: Catalog,
    /// Counters for the run so far
    pub report: PipelineReport,
}

/// Single-shot catalog build over a [`DocumentSource`].
///
/// Nothing is written unless every earlier stage succeeded, so a failed run
/// leaves the previous catalog in place.
pub struct Pipeline<S> {
    source: S,
    config: PipelineConfig,
    base: Option<Catalog>,
}

impl<S: DocumentSource> Pipeline<S> {
    /// Create a pipeline that merges into the compiled-in base catalog
    pub const fn new(source: S, config: PipelineConfig) -> Self {
        Self {
            source,
            config,
            base: None,
        }
    }

    /// Use `base` instead of the compiled-in base catalog
    #[must_use]
    pub fn with_base(mut self, base: Catalog) -> Self {
        self.base = Some(base);
        self
    }

    /// The active configuration
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetch, parse, decode and merge without writing anything
    pub async fn build(&self) -> Result<BuiltCatalog> {
        let base = match &self.base {
            Some(base) => base.clone(),
            None => base_catalog()?,
        };

        info!(url = %self.config.source_url, "downloading public resolvers");
        let document = self.source.fetch_text(&self.config.source_url).await?;

        let entries = parse_resolver_list(&document);
        let (decoded, stats) = collect_endpoints(&entries);
        if stats.malformed > 0 {
            warn!(count = stats.malformed, "skipped malformed stamps");
        }

        let catalog = merge_catalogs(&base, &decoded);
        info!(
            base = base.len(),
            decoded = decoded.len(),
            merged = catalog.len(),
            "merged catalogs"
        );

        let report = PipelineReport {
            source_url: self.config.source_url.clone(),
            decode: stats,
            base_entries: base.len(),
            decoded_entries: decoded.len(),
            merged_entries: catalog.len(),
            output_path: None,
        };

        Ok(BuiltCatalog { catalog, report })
    }

    /// Run the whole pipeline and persist the merged catalog
    pub async fn run(&self) -> Result<PipelineReport> {
        let BuiltCatalog {
            catalog,
            mut report,
        } = self.build().await?;

        write_catalog(&catalog, &self.config.output_path)?;
        report.output_path = Some(self.config.output_path.clone());

        Ok(report)
    }
}
