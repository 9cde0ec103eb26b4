//! `dohcat build` - Download the resolver list and write the merged catalog.

use anyhow::{anyhow, Result};
use colored::Colorize;
use dohcat::{Pipeline, PipelineReport, ResolverListFetcher};

use super::Context;
use crate::cli::args::BuildArgs;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: BuildArgs) -> Result<()> {
    let config = ctx.pipeline_config(&args);
    let fetcher = ResolverListFetcher::new(config.fetch.clone())?;
    let pipeline = Pipeline::new(fetcher, config);

    let result = if args.dry_run {
        pipeline.build().await.map(|built| built.report)
    } else {
        pipeline.run().await
    };
    let report = result.map_err(|e| anyhow!("{} stage failed: {e}", e.stage()))?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Pretty => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &PipelineReport) {
    let stats = &report.decode;

    println!("{} {}", "Source:".bold(), report.source_url.dimmed());
    println!(
        "{} {} stamps, {} DoH, {} other protocols, {} without host, {} malformed",
        "Stamps:".bold(),
        stats.stamps.to_string().cyan(),
        stats.decoded,
        stats.non_doh,
        stats.missing_hostname,
        if stats.malformed > 0 {
            stats.malformed.to_string().yellow()
        } else {
            stats.malformed.to_string().normal()
        }
    );
    println!(
        "{} {} base + {} decoded -> {} endpoints",
        "Catalog:".bold(),
        report.base_entries,
        report.decoded_entries,
        report.merged_entries.to_string().cyan().bold()
    );

    match &report.output_path {
        Some(path) => println!("{} {}", "Wrote:".green().bold(), path.display()),
        None => println!("{}", "Dry run: nothing written.".dimmed()),
    }
}
