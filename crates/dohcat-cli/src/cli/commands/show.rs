//! `dohcat show` - List the endpoints in a persisted catalog.

use anyhow::{anyhow, Result};
use colored::Colorize;
use dohcat::{CatalogCache, ResolverEndpoint};

use super::Context;
use crate::cli::args::ShowArgs;
use crate::output::{tri_state, OutputFormat};

pub async fn execute(ctx: Context, args: ShowArgs) -> Result<()> {
    let path = args.path.clone().unwrap_or_else(|| ctx.output_path());
    let cache = CatalogCache::new(path);
    let catalog = cache
        .get_or_load()
        .await
        .map_err(|e| anyhow!("{} stage failed: {e}", e.stage()))?;

    let needle = args.grep.as_deref().map(str::to_lowercase);
    let matches: Vec<&ResolverEndpoint> = catalog
        .iter()
        .filter(|e| {
            needle.as_deref().map_or(true, |n| {
                e.name.to_lowercase().contains(n) || e.url.to_lowercase().contains(n)
            })
        })
        .collect();

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        OutputFormat::Pretty => {
            for endpoint in &matches {
                print_endpoint(endpoint, ctx.verbose);
            }
            println!(
                "{} {} of {} endpoints ({})",
                "Total:".bold(),
                matches.len().to_string().cyan(),
                catalog.len(),
                cache.path().display()
            );
        }
    }

    Ok(())
}

fn print_endpoint(endpoint: &ResolverEndpoint, verbose: bool) {
    println!(
        "{}  {}  [{}]",
        endpoint.name.bold(),
        endpoint.url.cyan(),
        endpoint.request_method
    );

    if !endpoint.ip_hints.is_empty() {
        let ips: Vec<&str> = endpoint.ip_hints.iter().map(String::as_str).collect();
        println!("  {} {}", "IPs:".dimmed(), ips.join(", "));
    }

    if verbose {
        println!(
            "  {} {}  {} {}  {} {}  {} {}",
            "trust:".dimmed(),
            endpoint.trust_level.as_deref().unwrap_or("unknown"),
            "no-logs:".dimmed(),
            tri_state(endpoint.no_logs),
            "dnssec:".dimmed(),
            tri_state(endpoint.dnssec),
            "filter:".dimmed(),
            tri_state(endpoint.malware_filter),
        );
    }
}
