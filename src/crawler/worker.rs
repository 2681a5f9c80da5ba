//! Worker pool: fixed-size set of fetch-and-parse tasks
//!
//! Every worker loops over the shared frontier. Each consumed `WorkItem` ends
//! in exactly one `CrawlEvent::Completed`, sent after all of that item's
//! `CrawlEvent::Discovered` messages on the same channel; the coordinator's
//! termination check depends on both properties.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::frontier::{CrawlEvent, Frontier, PageOutcome, WorkItem};
use crate::crawler::parser::DocumentParser;
use crate::graph::{PageRecord, SiteGraph};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{info_span, Instrument, Span};

/// Everything a worker needs besides its channels
pub(crate) struct WorkerContext {
    pub graph: Arc<SiteGraph>,
    pub fetcher: Arc<dyn Fetcher>,
    pub parser: Arc<dyn DocumentParser>,
    pub domain: String,
    pub max_depth: usize,
}

/// Spawns `count` workers into a `JoinSet`, each instrumented under `parent`
pub(crate) fn spawn_workers(
    count: usize,
    context: Arc<WorkerContext>,
    frontier: Frontier,
    events: mpsc::Sender<CrawlEvent>,
    parent: &Span,
) -> JoinSet<()> {
    let mut workers = JoinSet::new();

    for id in 0..count {
        let span = info_span!(parent: parent, "worker", id);
        workers.spawn(
            run_worker(
                id,
                Arc::clone(&context),
                frontier.clone(),
                events.clone(),
            )
            .instrument(span),
        );
    }

    workers
}

async fn run_worker(
    id: usize,
    context: Arc<WorkerContext>,
    frontier: Frontier,
    events: mpsc::Sender<CrawlEvent>,
) {
    tracing::trace!("Worker #{} started", id);

    while let Some(item) = frontier.next().await {
        let outcome = process_item(&context, &item, &events).await;

        let completed = CrawlEvent::Completed {
            url: item.url,
            outcome,
        };
        if events.send(completed).await.is_err() {
            tracing::debug!("Coordinator gone, worker #{} exiting", id);
            return;
        }
    }

    tracing::trace!("Frontier closed, worker #{} exiting", id);
}

/// Runs one item through skip checks, fetch, parse and record
///
/// Failures are logged and folded into the returned outcome; they never end
/// the worker.
async fn process_item(
    context: &WorkerContext,
    item: &WorkItem,
    events: &mpsc::Sender<CrawlEvent>,
) -> PageOutcome {
    let url = item.url.as_str();

    if item.depth >= context.max_depth {
        tracing::trace!("Skipping {} at depth {} (max {})", url, item.depth, context.max_depth);
        return PageOutcome::DepthExceeded;
    }

    if context.graph.visited(url) || !context.graph.try_claim(url) {
        tracing::trace!("Skipping already visited {}", url);
        return PageOutcome::AlreadyVisited;
    }

    tracing::debug!("Processing url: {} (depth {})", url, item.depth);

    let body = match context.fetcher.fetch(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", url, e);
            return PageOutcome::FetchFailed;
        }
    };

    let parsed = match context.parser.parse(&body, &context.domain) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", url, e);
            return PageOutcome::ParseFailed;
        }
    };

    let links = parsed.links;
    context
        .graph
        .add_page(url, PageRecord::new(parsed.title, links.clone()));

    let depth = item.depth + 1;
    for link in &links {
        let discovered = CrawlEvent::Discovered {
            link: link.clone(),
            depth,
        };
        if events.send(discovered).await.is_err() {
            break;
        }
    }

    PageOutcome::Processed { links: links.len() }
}
