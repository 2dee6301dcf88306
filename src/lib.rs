//! Extract URLs, tool executions and metadata from agent reasoning traces.
//!
//! A run loads one JSON trace, finds every URL in it, ranks the URLs by
//! relevance keywords, flattens the tool executions recorded in the chain
//! of thought, and writes `extracted_data.json`, `tool_executions.csv` and
//! `urls.csv`.

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod trace;
pub mod ui;

pub use crate::config::Config;
pub use crate::core::{ExtractError, Result};
pub use crate::discovery::{
    Finder, RelevanceRanker, UrlFinder, extract_urls, load_document, sort_urls_by_relevance,
};
pub use crate::reporting::{OutputReport, RunOutcome, run};
pub use crate::trace::{
    FlatToolExecution, Metadata, extract_chain_of_thought, extract_metadata,
    extract_tool_executions, flatten_tool_execution,
};
