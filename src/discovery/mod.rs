//! Document loading and URL discovery
//!
//! This module handles reading the reasoning trace, finding URLs
//! anywhere in it and ranking them by relevance.

pub mod finder;
pub mod loader;
pub mod ranker;

// Re-export commonly used items
pub use finder::{Finder, UrlFinder, extract_urls};
pub use loader::{is_empty_document, load_document, parse_document, read_document};
pub use ranker::{RelevanceRanker, relevance_score, sort_urls_by_relevance};
