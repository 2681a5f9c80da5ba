//! Crawler module for concurrent page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The frontier coordinator that owns outstanding work and detects completion
//! - The fixed-size worker pool that fetches, parses and records pages
//! - The fetcher and document parser seams, with HTTP and HTML implementations

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod worker;

pub use coordinator::{crawl, Coordinator, CrawlReport, Crawler};
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use frontier::{CrawlEvent, Frontier, PageOutcome, WorkItem};
pub use parser::{parse_html, DocumentParser, HtmlParser, ParsedPage};
