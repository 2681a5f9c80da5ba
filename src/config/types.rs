use serde::Deserialize;

/// Seed address used when none is configured
pub const DEFAULT_DOMAIN: &str = "http://localhost:8080";

/// Number of concurrent workers used when none is configured
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// Maximum traversal depth used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Log verbosity used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main configuration structure for a crawl
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URL; relative links are resolved against it
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Number of concurrent fetch-and-parse workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Work items at this depth or deeper are never fetched
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: usize,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            workers: default_workers(),
            max_depth: default_max_depth(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_workers() -> usize {
    DEFAULT_WORKER_COUNT
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
