use crate::graph::PageRecord;
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct GraphInner {
    /// Completed pages
    pages: HashMap<String, PageRecord>,

    /// URLs a worker has taken responsibility for (in flight, or failed)
    claimed: HashSet<String>,
}

/// Concurrency-safe map of visited URL -> page record
///
/// Lookups take a shared read lock so that dedup checks from many workers do
/// not serialize behind each other; every mutation takes the write lock, which
/// makes check-and-insert atomic. The lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct SiteGraph {
    inner: RwLock<GraphInner>,
}

impl SiteGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a page record already exists for `url`
    pub fn visited(&self, url: &str) -> bool {
        self.read().pages.contains_key(url)
    }

    /// Marks `url` as owned by the caller
    ///
    /// Returns false when the URL already has a record or another worker has
    /// claimed it; exactly one of any number of concurrent callers wins.
    /// Claims are never released, so a URL whose fetch failed is not retried.
    pub fn try_claim(&self, url: &str) -> bool {
        let mut inner = self.write();
        if inner.pages.contains_key(url) {
            return false;
        }
        inner.claimed.insert(url.to_string())
    }

    /// Inserts `record` under `url` unless a record is already present
    ///
    /// First writer wins; later calls for the same URL are silent no-ops.
    /// Returns true if this call inserted the record.
    pub fn add_page(&self, url: &str, record: PageRecord) -> bool {
        let mut inner = self.write();
        if inner.pages.contains_key(url) {
            return false;
        }
        inner.claimed.remove(url);
        inner.pages.insert(url.to_string(), record);
        true
    }

    /// Returns the record stored for `url`, if any
    pub fn get(&self, url: &str) -> Option<PageRecord> {
        self.read().pages.get(url).cloned()
    }

    /// Copies out the current graph
    pub fn snapshot(&self) -> HashMap<String, PageRecord> {
        self.read().pages.clone()
    }

    /// Number of pages recorded so far
    pub fn len(&self) -> usize {
        self.read().pages.len()
    }

    /// Returns true if no page has been recorded
    pub fn is_empty(&self) -> bool {
        self.read().pages.is_empty()
    }

    // A panic while holding the lock cannot leave the maps half-updated (every
    // mutation is a single insert/remove), so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, GraphInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GraphInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
