//! webcrawler main entry point
//!
//! This is the command-line interface for the concurrent site mapper.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use webcrawler::config::{load_config, parse_log_level, validate, Config};
use webcrawler::crawler::Crawler;
use webcrawler::output::{print_edges, print_statistics};

/// A web crawler that creates a sitemap
///
/// Crawls every same-domain page reachable from a seed URL up to a maximum
/// depth, using a fixed pool of concurrent workers.
#[derive(Parser, Debug)]
#[command(name = "webcrawler")]
#[command(about = "A web crawler that creates a sitemap", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawls a given website and prints the sitemap
    Crawl(CrawlArgs),

    /// Prints the version
    Version,
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// Seed URL to crawl [default: http://localhost:8080]
    #[arg(short, long)]
    domain: Option<String>,

    /// Number of concurrent workers [default: 10]
    #[arg(short, long)]
    workers: Option<usize>,

    /// Max depth the crawler will crawl [default: 3]
    #[arg(short = 'n', long)]
    depth: Option<usize>,

    /// Logging level: trace, debug, info, warn, error [default: info]
    #[arg(short, long)]
    log: Option<String>,

    /// Optional TOML configuration file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Crawl(args) => handle_crawl(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Builds the effective configuration: file (or defaults), then flags
fn build_config(args: CrawlArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(domain) = args.domain {
        config.crawler.domain = domain;
    }
    if let Some(workers) = args.workers {
        config.crawler.workers = workers;
    }
    if let Some(depth) = args.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(level) = args.log {
        config.log.level = level;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber for the configured level
///
/// Unknown levels fall back to debug.
fn setup_logging(level: &str) {
    let parsed = parse_log_level(level);
    let filter = EnvFilter::new(parsed.unwrap_or(Level::DEBUG).as_str().to_ascii_lowercase());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();

    if parsed.is_none() {
        tracing::info!(
            "Could not parse log level: {}, defaulting to debug level",
            level
        );
    }
}

/// Handles the crawl subcommand
async fn handle_crawl(args: CrawlArgs) -> anyhow::Result<()> {
    let config = build_config(args)?;
    setup_logging(&config.log.level);

    let domain = config.crawler.domain.clone();
    let crawler = Crawler::new(config).context("Failed to start crawler")?;

    let report = match crawler.run().await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    print_edges(&report.graph, &domain);
    println!();
    print_statistics(&report.stats);

    Ok(())
}
