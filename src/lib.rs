//! VT Search Downloader - query a file search API and download the hits.
//!
//! # Features
//!
//! - One search request per run, authenticated with an API key
//! - All traffic routed through an optional HTTP proxy
//! - Sequential download of every hit, named by its identifier
//! - Text progress bar while downloading
//!
//! # Example
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use vt_search_downloader::{job, Config, Job};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.yaml"))?;
//!     let job = Job {
//!         query: "type:peexe".to_string(),
//!         download: true,
//!         output_dir: PathBuf::from("download"),
//!         interactive: false,
//!     };
//!     let outcome = job::run(&config, &job, &mut std::io::stdout()).await?;
//!     println!("{} files", outcome.downloaded.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod job;
pub mod output;

// Re-exports for convenience
pub use api::{Item, SearchApi, SearchResults};
pub use config::Config;
pub use download::download_results;
pub use error::{Error, Result};
pub use job::{Job, Outcome};
pub use output::Bar;
