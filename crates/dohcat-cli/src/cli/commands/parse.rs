//! `dohcat parse` - Run the parser over a local resolver list.

use anyhow::{Context as _, Result};
use colored::Colorize;
use dohcat::{collect_endpoints, parse_resolver_list};
use std::io::Read;
use std::path::Path;

use super::Context;
use crate::cli::args::ParseArgs;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ParseArgs) -> Result<()> {
    let document = read_document(&args.file)?;
    let entries = parse_resolver_list(&document);

    if args.endpoints {
        let (catalog, stats) = collect_endpoints(&entries);
        match ctx.output_format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "stats": stats,
                        "endpoints": catalog,
                    }))?
                );
            }
            OutputFormat::Pretty => {
                for endpoint in &catalog {
                    println!("{}  {}", endpoint.name.bold(), endpoint.url.cyan());
                }
                println!();
                println!(
                    "{} {} endpoints from {} stamps ({} skipped)",
                    "Total:".bold(),
                    catalog.len(),
                    stats.stamps,
                    stats.stamps - stats.decoded
                );
            }
        }
        return Ok(());
    }

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Pretty => {
            for entry in &entries {
                println!("{}  {}", entry.name.bold(), entry.stamp.dimmed());
            }
            println!();
            println!("{} {} stamps", "Total:".bold(), entries.len());
        }
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read resolver list from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read resolver list {}", path.display()))
}
