//! Filesystem module.
//!
//! Provides output directory checks and item file paths.

pub mod paths;

pub use paths::{ensure_output_dir, item_path, DEFAULT_OUTPUT_DIR};
