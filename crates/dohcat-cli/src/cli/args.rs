//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Build a DoH resolver catalog from DNSCrypt stamps
///
/// Downloads the public resolver list, decodes every DoH stamp and merges
/// the result with a curated base catalog.
#[derive(Parser, Debug)]
#[command(name = "dohcat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "DOHCAT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the resolver list and write the merged catalog
    Build(BuildArgs),

    /// Decode one or more sdns:// stamps
    Decode(DecodeArgs),

    /// Parse a local resolver list document
    Parse(ParseArgs),

    /// List the endpoints in a persisted catalog
    Show(ShowArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Build command
// ============================================================================

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Resolver list URL
    #[arg(long, env = "DNSCRYPT_PUBLIC_RESOLVERS_URL")]
    pub source_url: Option<String>,

    /// Where to write the catalog
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Download timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum redirects to follow
    #[arg(long)]
    pub max_redirects: Option<usize>,

    /// Build the catalog but do not write it
    #[arg(long)]
    pub dry_run: bool,
}

// ============================================================================
// Decode command
// ============================================================================

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Stamps to decode (e.g., sdns://AgcAAAAAAAAA...)
    #[arg(required = true)]
    pub stamps: Vec<String>,
}

// ============================================================================
// Parse command
// ============================================================================

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Markdown resolver list, or "-" for stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Print the decoded endpoints instead of the raw stamp pairs
    #[arg(long)]
    pub endpoints: bool,
}

// ============================================================================
// Show command
// ============================================================================

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Catalog file (defaults to the build output path)
    pub path: Option<PathBuf>,

    /// Only show endpoints whose name or URL contains this text
    #[arg(short, long)]
    pub grep: Option<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., source_url, timeout_secs)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
