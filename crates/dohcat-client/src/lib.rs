//! HTTP retrieval of DNSCrypt resolver lists.
//!
//! This crate provides [`ResolverListFetcher`], which downloads the Markdown
//! resolver list with a bounded redirect chain and an explicit timeout.

#![doc(html_root_url = "https://docs.rs/dohcat-client/0.3.0")]

mod config;
mod fetcher;
mod source;

pub use config::*;
pub use fetcher::ResolverListFetcher;
pub use source::DocumentSource;
pub use dohcat_core::{CatalogError, Result};
