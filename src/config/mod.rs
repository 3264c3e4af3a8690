//! Configuration module for the vt-search-downloader.
//!
//! This module handles:
//! - Loading configuration from YAML files
//! - Expanding the search and download URL templates

pub mod loader;
pub mod template;

pub use loader::Config;
pub use template::{escape_query, expand};
