//! dohcat - DoH resolver catalog builder
//!
//! Downloads the DNSCrypt public resolver list and writes a merged catalog.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dohcat_cli::run().await
}
