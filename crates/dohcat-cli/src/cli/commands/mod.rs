//! Command implementations.

pub mod build;
pub mod config;
pub mod decode;
pub mod parse;
pub mod show;

use dohcat::{FetchConfig, PipelineConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::BuildArgs;
use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration file
    pub config: Config,

    /// Where the configuration file lives
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Catalog path from the config file or the built-in default.
    pub fn output_path(&self) -> PathBuf {
        self.config
            .output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// Resolve pipeline settings: flags and env first, then config, then defaults.
    pub fn pipeline_config(&self, args: &BuildArgs) -> PipelineConfig {
        let mut fetch = FetchConfig::new();
        if let Some(secs) = args.timeout.or(self.config.timeout_secs) {
            fetch = fetch.timeout(Duration::from_secs(secs));
        }
        if let Some(max) = args.max_redirects.or(self.config.max_redirects) {
            fetch = fetch.max_redirects(max);
        }

        PipelineConfig {
            source_url: args
                .source_url
                .clone()
                .or_else(|| self.config.source_url.clone())
                .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
            output_path: args.output.clone().unwrap_or_else(|| self.output_path()),
            fetch,
        }
    }
}
