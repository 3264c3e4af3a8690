//! Search API module.
//!
//! This module provides:
//! - HTTP client for the search and download endpoints
//! - Search response types

pub mod client;
pub mod types;

pub use client::{SearchApi, API_KEY_HEADER};
pub use types::*;
