//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the search parameters before the request goes out.
pub fn print_query_summary(query: &str, limit: u32, download: bool, output_dir: &str) {
    println!();
    println!("{}", style("Query:").bold());
    println!("  Search:   {}", query);
    println!("  Limit:    {}", limit);
    if download {
        println!("  Saving to {}", output_dir);
    }
    println!();
}
