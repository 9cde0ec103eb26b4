//! Core types and catalog-building logic for dohcat.
//!
//! This crate turns DNSCrypt resolver lists into a deduplicated DoH catalog:
//!
//! - **Stamps**: [`decode_stamp`] reads a single `sdns://` stamp
//! - **Parsing**: [`parse_resolver_list`] pairs stamps with their section names
//! - **Collection**: [`collect_endpoints`] folds decoded stamps into endpoints
//! - **Merging**: [`merge_catalogs`] combines the curated seed with decoded entries
//! - **Persistence**: [`write_catalog`] and [`read_catalog`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dohcat_core::{base_catalog, collect_endpoints, merge_catalogs, parse_resolver_list};
//!
//! fn build(markdown: &str) -> dohcat_core::Result<dohcat_core::Catalog> {
//!     let entries = parse_resolver_list(markdown);
//!     let (decoded, stats) = collect_endpoints(&entries);
//!     println!("decoded {} of {} stamps", stats.decoded, stats.stamps);
//!     Ok(merge_catalogs(&base_catalog()?, &decoded))
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/dohcat-core/0.3.0")]

mod collect;
mod error;
mod merge;
mod parser;
mod seed;
pub mod stamp;
pub mod types;
mod writer;

pub use collect::{collect_endpoints, DecodeStats};
pub use error::{CatalogError, Result, StampError};
pub use merge::merge_catalogs;
pub use parser::{parse_resolver_list, PLACEHOLDER_SECTION};
pub use seed::base_catalog;
pub use stamp::{decode_stamp, STAMP_PREFIX};
pub use types::*;
pub use writer::{read_catalog, write_catalog};
