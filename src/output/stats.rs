//! Result listing and download summary.

use std::io::{self, Write};

use console::style;

use crate::api::SearchResults;

/// Write one line per search hit, in result order.
pub fn write_results<W: Write>(out: &mut W, results: &SearchResults) -> io::Result<()> {
    for (index, item) in results.data.iter().enumerate() {
        if item.kind.is_empty() {
            writeln!(out, "{:>4}. {}", index + 1, item.id)?;
        } else {
            writeln!(out, "{:>4}. {} ({})", index + 1, item.id, item.kind)?;
        }
    }
    Ok(())
}

/// Print statistics for a search.
pub fn print_search_stats(results: &SearchResults) {
    println!();
    println!("{}", style("Search results:").bold());
    println!("  Total hits: {}", results.meta.total_hits);
    println!("  Returned:   {}", results.len());
    if !results.links.next.is_empty() {
        println!("  {}", style("More results available (not fetched)").dim());
    }
}

/// Print a summary line once the batch is written.
pub fn print_download_summary(downloaded: usize, output_dir: &str) {
    println!(
        "Downloaded: {} file(s) to {}",
        style(downloaded).green(),
        output_dir
    );
}
