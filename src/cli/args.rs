//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::fs::DEFAULT_OUTPUT_DIR;
use crate::job::Job;

/// Query used when `-q` is not given.
pub const DEFAULT_QUERY: &str =
    "engines:acad and p:10+ and fs:2022-09-01T00:00:00+ not type:peexe";

/// File search and download CLI.
#[derive(Parser, Debug)]
#[command(
    name = "vt-search-downloader",
    version,
    about = "Search a file intelligence API and download the matching files",
    long_about = "Runs one search query against the configured search endpoint and prints the hits.\n\n\
                  With --download, every hit is fetched from the download endpoint and saved \
                  under the output directory, named by its identifier."
)]
pub struct Args {
    /// Search query syntax.
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Download the query results.
    #[arg(short, long)]
    pub download: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Existing directory downloads are saved into.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// API key, overriding the config file.
    #[arg(long = "api-key", env = "VT_APIKEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// HTTP proxy URL, overriding the config file.
    #[arg(long, env = "VT_PROXY")]
    pub proxy: Option<String>,

    /// Maximum number of results, overriding the config file.
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Hide the spinner and summaries.
    #[arg(long)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }

        if let Some(proxy) = &self.proxy {
            config.proxy = Some(proxy.clone());
        }

        if let Some(limit) = self.limit {
            config.limit = limit;
        }
    }

    /// The job described by these arguments.
    pub fn job(&self) -> Job {
        Job {
            query: self.query.clone(),
            download: self.download,
            output_dir: self.output.clone(),
            interactive: !self.quiet,
        }
    }
}
