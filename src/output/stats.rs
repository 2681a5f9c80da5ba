//! Statistics gathered while a crawl runs
//!
//! The coordinator owns a `CrawlStats` and updates it from the events it
//! receives; it is handed to the caller with the final graph.

use crate::crawler::PageOutcome;
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Work items handed to the worker pool
    pub dispatched: u64,

    /// Completion reports received
    pub completed: u64,

    /// Discovery events accepted into the frontier
    pub discovered: u64,

    /// Pages fetched, parsed and recorded
    pub processed: u64,

    /// Items skipped because the URL was already visited or claimed
    pub skipped_visited: u64,

    /// Items skipped at or beyond the maximum depth
    pub skipped_depth: u64,

    /// Items whose fetch failed
    pub fetch_failures: u64,

    /// Items whose document could not be parsed
    pub parse_failures: u64,

    /// Wall-clock time of the crawl
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Folds one completion into the counters
    pub fn record(&mut self, outcome: PageOutcome) {
        self.completed += 1;
        match outcome {
            PageOutcome::Processed { .. } => self.processed += 1,
            PageOutcome::AlreadyVisited => self.skipped_visited += 1,
            PageOutcome::DepthExceeded => self.skipped_depth += 1,
            PageOutcome::FetchFailed => self.fetch_failures += 1,
            PageOutcome::ParseFailed => self.parse_failures += 1,
        }
    }

    /// Items that ended in a fetch or parse failure
    pub fn failures(&self) -> u64 {
        self.fetch_failures + self.parse_failures
    }

    /// Processed pages per second of wall-clock time
    pub fn pages_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.processed as f64 / secs
        } else {
            0.0
        }
    }
}

/// Prints statistics to stdout in a human-readable format
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");
    println!("Pages processed: {}", stats.processed);
    println!("Work items dispatched: {}", stats.dispatched);
    println!("Links discovered: {}", stats.discovered);

    println!("\nSkipped:");
    println!("  Already visited: {}", stats.skipped_visited);
    println!("  Depth exceeded: {}", stats.skipped_depth);

    if stats.failures() > 0 {
        println!("\nFailures:");
        println!("  Fetch: {}", stats.fetch_failures);
        println!("  Parse: {}", stats.parse_failures);
    }

    println!(
        "\nTime: {:?} ({:.2} pages/sec)",
        stats.elapsed,
        stats.pages_per_second()
    );
}
