//! Frontier types and the work channel shared by the worker pool
//!
//! The coordinator is the only producer of `WorkItem`s; workers are the only
//! consumers. Everything workers learn flows back as `CrawlEvent`s on a single
//! ordered channel per sender.

use kanal::{bounded_async, AsyncReceiver, AsyncSender};

/// One unit of crawl work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Resolved URL, used verbatim as the graph key
    pub url: String,

    /// Hops from the seed (the seed is depth 0)
    pub depth: usize,
}

impl WorkItem {
    /// Creates a work item
    pub fn new(url: impl Into<String>, depth: usize) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }

    /// The root work item of a crawl
    pub fn seed(url: impl Into<String>) -> Self {
        Self::new(url, 0)
    }
}

/// How one consumed `WorkItem` ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Fetched, parsed and recorded; `links` discoveries were emitted
    Processed { links: usize },

    /// Already recorded, or claimed by another worker
    AlreadyVisited,

    /// At or beyond the maximum depth
    DepthExceeded,

    /// Transport failure
    FetchFailed,

    /// Document could not be parsed
    ParseFailed,
}

/// Messages from workers to the coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A raw link extracted from a page, to be resolved and queued at `depth`
    Discovered { link: String, depth: usize },

    /// A consumed work item is fully accounted for
    Completed { url: String, outcome: PageOutcome },
}

/// Receiving half of the work channel, shared by every worker
///
/// Each clone is an independent consumer of the same rendezvous channel, so
/// any number of idle workers can wait on it at once.
#[derive(Debug, Clone)]
pub struct Frontier {
    rx: AsyncReceiver<WorkItem>,
}

impl Frontier {
    /// Creates the zero-capacity hand-off channel and its receiving half
    ///
    /// A send completes only once a worker has taken the item.
    pub fn channel() -> (AsyncSender<WorkItem>, Frontier) {
        let (tx, rx) = bounded_async(0);
        (tx, Frontier { rx })
    }

    /// Waits for the next work item
    ///
    /// Returns `None` once the coordinator has closed the frontier.
    pub async fn next(&self) -> Option<WorkItem> {
        self.rx.recv().await.ok()
    }
}
