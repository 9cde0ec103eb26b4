//! `dohcat decode` - Inspect individual stamps.

use anyhow::Result;
use colored::Colorize;
use dohcat::{decode_stamp, StampDescriptor};
use serde::Serialize;

use super::Context;
use crate::cli::args::DecodeArgs;
use crate::output::OutputFormat;

#[derive(Serialize)]
struct Decoded<'a> {
    stamp: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptor: Option<StampDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn execute(ctx: Context, args: DecodeArgs) -> Result<()> {
    let results: Vec<Decoded<'_>> = args
        .stamps
        .iter()
        .map(|stamp| match decode_stamp(stamp) {
            Ok(descriptor) => Decoded {
                stamp,
                url: descriptor.doh_url(),
                descriptor: Some(descriptor),
                error: None,
            },
            Err(e) => Decoded {
                stamp,
                descriptor: None,
                url: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Pretty => {
            for result in &results {
                print_decoded(result);
            }
        }
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} stamps could not be decoded", results.len());
    }

    Ok(())
}

fn print_decoded(result: &Decoded<'_>) {
    println!("{}", result.stamp.dimmed());

    if let Some(error) = &result.error {
        println!("  {} {}", "Error:".red().bold(), error);
        println!();
        return;
    }

    let Some(d) = &result.descriptor else {
        return;
    };

    println!("  {} 0x{:02x}", "Protocol:".bold(), d.protocol);
    if d.is_doh() {
        let or_none = |s: &str| {
            if s.is_empty() {
                "(none)".dimmed().to_string()
            } else {
                s.to_string()
            }
        };
        println!("  {} {}", "Address:".bold(), or_none(&d.address));
        println!("  {} {}", "Hostname:".bold(), or_none(&d.hostname));
        println!("  {} {}", "Path:".bold(), d.path);
        println!("  {} {:#018x}", "Props:".bold(), d.props);
        match &result.url {
            Some(url) => println!("  {} {}", "URL:".bold(), url.cyan()),
            None => println!("  {}", "No hostname; not usable as a DoH endpoint.".yellow()),
        }
    } else {
        println!("  {}", "Not a DoH stamp.".dimmed());
    }
    println!();
}
