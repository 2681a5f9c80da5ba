//! Crawl coordinator - frontier ownership and termination detection
//!
//! This module contains the main crawl orchestration, including:
//! - Seeding the frontier with the root URL
//! - Resolving discovered links and re-injecting them as work
//! - Owning the pending-work count and detecting termination
//! - Starting the worker pool and collecting the final graph
//!
//! # Termination
//!
//! The pending count starts at 1 for the seed, grows by one for every accepted
//! discovery and shrinks by one for every completion. Only the coordinator task
//! touches it, and it is checked right after each event. A worker always sends
//! an item's discoveries before that item's completion on the same channel, so
//! the count cannot reach zero while any accepted work is outstanding.

use crate::config::{validate, Config};
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::frontier::{CrawlEvent, Frontier, PageOutcome, WorkItem};
use crate::crawler::parser::{DocumentParser, HtmlParser};
use crate::crawler::worker::{spawn_workers, WorkerContext};
use crate::graph::{PageRecord, SiteGraph};
use crate::output::CrawlStats;
use crate::url::resolve_link;
use crate::CrawlError;
use kanal::AsyncSender;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{info_span, Instrument, Span};

/// Log progress after this many processed pages
const PROGRESS_INTERVAL: u64 = 10;

/// A hand-off to the pool that has started but not yet been taken
type Dispatch = Pin<Box<dyn Future<Output = Result<(), kanal::SendError>> + Send>>;

/// Resolves when the in-flight hand-off completes; never resolves without one
async fn dispatched(in_flight: &mut Option<Dispatch>) -> Result<(), kanal::SendError> {
    match in_flight {
        Some(send) => send.await,
        None => std::future::pending().await,
    }
}

/// Single owner of the frontier and the pending-work count
pub struct Coordinator {
    domain: String,

    /// Work items accepted but not yet completed
    pending: usize,

    /// Accepted work not yet handed to a worker
    backlog: VecDeque<WorkItem>,

    stats: CrawlStats,
}

impl Coordinator {
    /// Creates a coordinator in the seeding state: the root URL queued, count 1
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        let mut backlog = VecDeque::new();
        backlog.push_back(WorkItem::seed(domain.clone()));

        Self {
            domain,
            pending: 1,
            backlog,
            stats: CrawlStats::default(),
        }
    }

    /// Number of work items outstanding anywhere in the system
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Drives the crawl until the pending count returns to zero
    ///
    /// Alternates between receiving worker events and handing queued work to
    /// the pool, one item at a time. A started hand-off is kept across loop
    /// iterations and never dropped half-way, so an item is delivered exactly
    /// once. Returning drops `work_tx`, which closes the frontier.
    ///
    /// # Errors
    ///
    /// `CrawlError::WorkersExited` if every worker disappears while work is
    /// still outstanding.
    pub async fn run(
        mut self,
        work_tx: AsyncSender<WorkItem>,
        mut events: mpsc::Receiver<CrawlEvent>,
    ) -> Result<CrawlStats, CrawlError> {
        tracing::debug!("Seeded frontier with {}", self.domain);

        let mut in_flight: Option<Dispatch> = None;

        while self.pending > 0 {
            if in_flight.is_none() {
                if let Some(item) = self.backlog.pop_front() {
                    tracing::trace!("Dispatching {} (depth {})", item.url, item.depth);
                    let tx = work_tx.clone();
                    let send: Dispatch = Box::pin(async move { tx.send(item).await });
                    in_flight = Some(send);
                }
            }

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => return Err(CrawlError::WorkersExited { pending: self.pending }),
                },
                sent = dispatched(&mut in_flight), if in_flight.is_some() => {
                    in_flight = None;
                    sent.map_err(|_| CrawlError::WorkersExited {
                        pending: self.pending,
                    })?;
                    self.stats.dispatched += 1;
                }
            }
        }

        tracing::debug!("Pending count reached zero, closing frontier");
        Ok(self.stats)
    }

    /// Applies one worker event to the count and the backlog
    pub fn handle_event(&mut self, event: CrawlEvent) {
        match event {
            CrawlEvent::Discovered { link, depth } => {
                let url = resolve_link(&self.domain, &link);
                self.pending += 1;
                self.stats.discovered += 1;
                self.backlog.push_back(WorkItem::new(url, depth));
            }
            CrawlEvent::Completed { url, outcome } => {
                debug_assert!(self.pending > 0, "completion for {} with nothing pending", url);
                self.pending = self.pending.saturating_sub(1);
                self.stats.record(outcome);

                if matches!(outcome, PageOutcome::Processed { .. })
                    && self.stats.processed % PROGRESS_INTERVAL == 0
                {
                    tracing::info!(
                        "Progress: {} pages processed, {} pending, {} queued",
                        self.stats.processed,
                        self.pending,
                        self.backlog.len()
                    );
                }
            }
        }
    }
}

/// Final result of a crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Visited URL -> page record
    pub graph: HashMap<String, PageRecord>,

    /// Counters gathered by the coordinator
    pub stats: CrawlStats,
}

/// A configured crawl: collaborators, shared graph and logging span
pub struct Crawler {
    config: Config,
    graph: Arc<SiteGraph>,
    fetcher: Arc<dyn Fetcher>,
    parser: Arc<dyn DocumentParser>,
    span: Span,
}

impl Crawler {
    /// Creates a crawler with the HTTP fetcher and HTML parser
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        validate(&config)?;
        let fetcher = HttpFetcher::new(&config.http)?;
        let span = info_span!("crawl", domain = %config.crawler.domain);

        Ok(Self {
            config,
            graph: Arc::new(SiteGraph::new()),
            fetcher: Arc::new(fetcher),
            parser: Arc::new(HtmlParser),
            span,
        })
    }

    /// Replaces the document fetcher
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Replaces the document parser
    pub fn with_parser(mut self, parser: Arc<dyn DocumentParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Replaces the span the coordinator and workers log under
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The graph this crawler records into
    pub fn graph(&self) -> Arc<SiteGraph> {
        Arc::clone(&self.graph)
    }

    /// Runs the crawl to completion
    ///
    /// Starts the worker pool, drives the coordinator until no work is
    /// outstanding, waits for every worker to exit, and returns the graph.
    /// A crawler runs once; handles from [`Crawler::graph`] stay valid after.
    ///
    /// # Errors
    ///
    /// Only pool-level failures are returned: a worker task panicking, or the
    /// pool disappearing with work outstanding. Per-URL failures are logged and
    /// counted in the stats.
    pub async fn run(self) -> Result<CrawlReport, CrawlError> {
        let start = Instant::now();
        let crawler = &self.config.crawler;

        tracing::info!(
            parent: &self.span,
            "Starting crawl of {} with {} workers, max depth {}",
            crawler.domain,
            crawler.workers,
            crawler.max_depth
        );

        let (work_tx, frontier) = Frontier::channel();
        let (event_tx, event_rx) = mpsc::channel(crawler.workers);

        let context = Arc::new(WorkerContext {
            graph: Arc::clone(&self.graph),
            fetcher: Arc::clone(&self.fetcher),
            parser: Arc::clone(&self.parser),
            domain: crawler.domain.clone(),
            max_depth: crawler.max_depth,
        });
        let mut workers = spawn_workers(crawler.workers, context, frontier, event_tx, &self.span);

        let coordinator = Coordinator::new(crawler.domain.clone())
            .run(work_tx, event_rx)
            .instrument(self.span.clone());
        tokio::pin!(coordinator);

        let mut stats = loop {
            tokio::select! {
                result = &mut coordinator => break result?,
                Some(joined) = workers.join_next() => joined?,
            }
        };

        while let Some(joined) = workers.join_next().await {
            joined?;
        }

        stats.elapsed = start.elapsed();
        tracing::info!(
            parent: &self.span,
            "Crawl completed: {} pages processed, {} failed, in {:?}",
            stats.processed,
            stats.failures(),
            stats.elapsed
        );

        Ok(CrawlReport {
            graph: self.graph.snapshot(),
            stats,
        })
    }
}

/// Runs a complete crawl with the default collaborators
///
/// # Example
///
/// ```no_run
/// use webcrawler::config::Config;
/// use webcrawler::crawler::crawl;
///
/// # async fn example() -> Result<(), webcrawler::CrawlError> {
/// let report = crawl(Config::default()).await?;
/// println!("{} pages", report.graph.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    Crawler::new(config)?.run().await
}
