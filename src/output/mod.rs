//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - The download progress bar and search spinner
//! - Result listing and summaries

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{print_error, print_info, print_query_summary, print_success, print_warning};
pub use progress::{create_spinner, Bar};
pub use stats::{print_download_summary, print_search_stats, write_results};
