//! Report assembly and output
//!
//! This module builds the combined report, encodes it as JSON and CSV,
//! writes the files and holds the logging helpers used across the crate.

pub mod formatter;
pub mod logging;
pub mod report;
pub mod writer;

// Re-export commonly used items
pub use report::{OutputReport, RunOutcome, run, run_with_writer, write_reports};
pub use writer::{WriteToFile, Writer, ensure_output_dir};
