//! Configuration module for the crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration that command-line flags can then override.
//!
//! # Example
//!
//! ```no_run
//! use webcrawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, HttpConfig, LogConfig, DEFAULT_DOMAIN, DEFAULT_LOG_LEVEL,
    DEFAULT_MAX_DEPTH, DEFAULT_WORKER_COUNT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::{parse_log_level, validate};
