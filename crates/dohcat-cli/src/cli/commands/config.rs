//! `dohcat config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&ctx, &key, &value),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Pretty => {
            let unset = || "(not set)".dimmed().to_string();

            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "source_url:".bold(),
                config.source_url.clone().unwrap_or_else(unset)
            );
            println!(
                "  {} {}",
                "output_path:".bold(),
                config
                    .output_path
                    .as_ref()
                    .map_or_else(unset, |p| p.display().to_string())
            );
            println!(
                "  {} {}",
                "timeout_secs:".bold(),
                config.timeout_secs.map_or_else(unset, |v| v.to_string())
            );
            println!(
                "  {} {}",
                "max_redirects:".bold(),
                config.max_redirects.map_or_else(unset, |v| v.to_string())
            );
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.config.clone();

    match key {
        "source_url" => config.source_url = Some(value.to_string()),
        "output_path" | "output" => config.output_path = Some(PathBuf::from(value)),
        "timeout_secs" | "timeout" => config.timeout_secs = Some(value.parse()?),
        "max_redirects" => config.max_redirects = Some(value.parse()?),
        "output_format" | "format" => config.output_format = Some(value.parse()?),
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 source_url     - Resolver list URL\n  \
                 output_path    - Where build writes the catalog\n  \
                 timeout_secs   - Download timeout in seconds\n  \
                 max_redirects  - Redirect cap for the download\n  \
                 output_format  - Default output format (pretty/json)",
                key
            );
        }
    }

    config.save_to(&ctx.config_path)?;
    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());

    Ok(())
}
