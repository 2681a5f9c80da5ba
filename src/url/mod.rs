//! URL handling module
//!
//! This module provides host extraction, same-domain checks, and the
//! resolution of raw link targets into the URL strings used as graph keys.

mod domain;
mod resolve;

// Re-export main functions
pub use domain::{extract_domain, is_same_domain};
pub use resolve::resolve_link;
