//! Download module for fetching search results to disk.
//!
//! This module provides:
//! - Sequential batch download with progress reporting
//! - Single item download

pub mod batch;

pub use batch::{download_item, download_results};
