//! Build a deduplicated DoH resolver catalog from DNSCrypt stamps.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dohcat::{Pipeline, PipelineConfig, ResolverListFetcher};
//!
//! #[tokio::main]
//! async fn main() -> dohcat::Result<()> {
//!     let config = PipelineConfig::from_env();
//!     let fetcher = ResolverListFetcher::new(config.fetch.clone())?;
//!
//!     let report = Pipeline::new(fetcher, config).run().await?;
//!     println!("Wrote {} endpoints", report.merged_entries);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/dohcat/0.3.0")]

mod cache;
mod pipeline;

// Re-export core types
pub use dohcat_core::*;

// Re-export client
pub use dohcat_client::{
    source_url_from_env, DocumentSource, FetchConfig, ResolverListFetcher, DEFAULT_MAX_REDIRECTS,
    DEFAULT_SOURCE_URL, DEFAULT_TIMEOUT, SOURCE_URL_ENV,
};

pub use cache::CatalogCache;
pub use pipeline::{BuiltCatalog, Pipeline, PipelineConfig, PipelineReport, DEFAULT_OUTPUT_PATH};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
