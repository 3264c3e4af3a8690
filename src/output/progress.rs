//! Progress display: the download bar and the search spinner.

use indicatif::{ProgressBar, ProgressStyle};

/// Width of the fill field; one fill character per two percent.
const BAR_WIDTH: usize = 50;

/// Default fill character.
const DEFAULT_GRAPH: char = '#';

/// Text progress bar for a batch of downloads.
///
/// Rendering is left to the caller: [`Bar::play`] returns the line to
/// draw, which starts with a carriage return so successive lines
/// overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    percent: u64,
    current: u64,
    total: u64,
    rate: String,
    graph: char,
}

impl Bar {
    /// Create a bar at `start` out of `total`, filled with `#`.
    pub fn new(start: u64, total: u64) -> Self {
        Self::with_graph(start, total, DEFAULT_GRAPH)
    }

    /// Create a bar with a custom fill character.
    pub fn with_graph(start: u64, total: u64, graph: char) -> Self {
        let mut bar = Self {
            percent: 0,
            current: start,
            total,
            rate: String::with_capacity(BAR_WIDTH),
            graph,
        };
        bar.percent = bar.compute_percent();
        bar.fill();
        bar
    }

    /// Move to `current` and return the rendered line.
    pub fn play(&mut self, current: u64, msg: &str) -> String {
        self.current = current;
        self.percent = self.compute_percent();
        self.fill();
        self.render(msg)
    }

    /// Line terminator that ends the overwrite sequence.
    pub fn finish(&self) -> &'static str {
        "\n"
    }

    pub fn percent(&self) -> u64 {
        self.percent
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// The accumulated fill string.
    pub fn rate(&self) -> &str {
        &self.rate
    }

    fn render(&self, msg: &str) -> String {
        format!(
            "\rDownloading: [{:<width$}]{:>3}%  {:>8}/{} - {}",
            self.rate,
            self.percent,
            self.current,
            self.total,
            msg,
            width = BAR_WIDTH
        )
    }

    /// Truncating percentage; an empty batch counts as 0%.
    fn compute_percent(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (self.current.saturating_mul(100) / self.total).min(100)
    }

    /// Grow the fill string to match the current percentage.
    fn fill(&mut self) {
        let target = (self.percent / 2) as usize;
        let filled = self.rate.chars().count();
        for _ in filled..target {
            self.rate.push(self.graph);
        }
    }
}

/// Create a spinner for long-running operations.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
