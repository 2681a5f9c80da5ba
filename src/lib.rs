//! webcrawler: a concurrent single-domain site mapper
//!
//! This crate crawls one web domain from a seed address, follows same-domain
//! hyperlinks up to a maximum depth with a fixed pool of workers, and produces
//! a graph mapping every visited URL to its page title and outbound links.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Worker pool exited with {pending} work items outstanding")]
    WorkersExited { pending: usize },

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),
}

/// Transport failures for a single URL
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("No document available for {url}")]
    NotFound { url: String },
}

/// Document parse failures for a single URL
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Document is empty")]
    EmptyDocument,

    #[error("Invalid selector {selector}: {message}")]
    Selector { selector: String, message: String },

    #[error("Invalid domain {domain}: {message}")]
    InvalidDomain { domain: String, message: String },
}

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlReport, Crawler};
pub use graph::{PageRecord, SiteGraph};
pub use output::CrawlStats;
