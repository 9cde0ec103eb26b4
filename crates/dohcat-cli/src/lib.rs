//! # dohcat-cli
//!
//! Command-line interface for building and inspecting DoH resolver catalogs.
//!
//! ## Features
//!
//! - **build**: Download the DNSCrypt resolver list and write the merged catalog
//! - **decode**: Inspect individual `sdns://` stamps
//! - **parse**: Run the parser over a local resolver list
//! - **show**: List a persisted catalog
//! - **Multiple output formats**: Pretty text or JSON

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
