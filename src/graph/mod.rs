//! Site graph module
//!
//! The site graph maps every visited URL to the record produced by fetching and
//! parsing it. It is shared by all workers and doubles as the visited-set.
//!
//! # Components
//!
//! - `PageRecord`: title and raw outbound links of one page
//! - `SiteGraph`: the concurrency-safe URL -> `PageRecord` store

mod page;
mod site_graph;

pub use page::PageRecord;
pub use site_graph::SiteGraph;
