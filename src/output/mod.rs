//! Output module for presenting crawl results
//!
//! This module handles:
//! - Listing the parent -> child edges of the final site graph
//! - Crawl statistics and the end-of-run summary

mod edges;
mod stats;

pub use edges::{edges, print_edges};
pub use stats::{print_statistics, CrawlStats};
