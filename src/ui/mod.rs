//! User interface and interaction
//!
//! This module contains the command line definition and its
//! conversion into configuration values.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
