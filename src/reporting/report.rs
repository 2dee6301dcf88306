//! Report assembly and output
//!
//! Ties the pipeline together: load the trace, extract metadata, the chain
//! of thought, tool executions and ranked URLs, then write the combined
//! JSON report and the two CSV exports. Each write stands on its own; a
//! failure is reported and the remaining outputs are still attempted.

use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::core::constants::{files, messages};
use crate::core::error::Result;
use crate::discovery::{RelevanceRanker, extract_urls, is_empty_document, load_document};
use crate::reporting::formatter::{CsvFormatter, FormatCsv, to_pretty_string};
use crate::reporting::logging;
use crate::reporting::writer::{WriteToFile, Writer};
use crate::trace::{
    FlatToolExecution, Metadata, extract_chain_of_thought, extract_metadata,
    flatten_tool_execution, tool_executions_in_chain,
};

use std::path::{Path, PathBuf};

/// Everything extracted from one trace, in output key order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputReport {
    pub metadata: Metadata,
    pub chain_of_thought: Value,
    pub tool_executions: Vec<Value>,
    pub sorted_urls: Vec<String>,
}

impl OutputReport {
    pub fn from_document(document: &Value, ranker: &RelevanceRanker) -> Self {
        let metadata = extract_metadata(document);
        let chain_of_thought = extract_chain_of_thought(document);
        let tool_executions = tool_executions_in_chain(&chain_of_thought);

        let sorted_urls = ranker.rank(extract_urls(document));
        if sorted_urls.is_empty() {
            logging::log_notice(messages::NO_URLS_FOUND);
        }

        logging::log_extraction_summary(
            chain_of_thought.as_array().map_or(0, Vec::len),
            tool_executions.len(),
            sorted_urls.len(),
        );

        Self {
            metadata,
            chain_of_thought,
            tool_executions,
            sorted_urls,
        }
    }

    /// Tool executions reduced to CSV cells
    pub fn flat_tool_executions(&self) -> Result<Vec<FlatToolExecution>> {
        self.tool_executions
            .iter()
            .map(flatten_tool_execution)
            .collect()
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The input could not be loaded or held no data; nothing was written
    NoData,
    /// Extraction ran; lists the files written and the ones that failed
    Completed {
        written: Vec<PathBuf>,
        failed: Vec<PathBuf>,
    },
}

/// Extract a trace at `input` and write the reports into `output_dir`
pub fn run(input: &Path, output_dir: &Path, config: &Config) -> RunOutcome {
    run_with_writer(input, output_dir, config, &Writer)
}

pub fn run_with_writer<W: WriteToFile>(
    input: &Path,
    output_dir: &Path,
    config: &Config,
    writer: &W,
) -> RunOutcome {
    let Some(document) = load_document(input) else {
        return RunOutcome::NoData;
    };
    if is_empty_document(&document) {
        logging::log_skipped(&input.display().to_string(), "document holds no data");
        return RunOutcome::NoData;
    }

    let ranker = RelevanceRanker::new(config.keywords());
    let report = OutputReport::from_document(&document, &ranker);

    write_reports(&report, output_dir, writer)
}

/// Write the JSON report and CSV exports, skipping empty exports
pub fn write_reports<W: WriteToFile>(
    report: &OutputReport,
    output_dir: &Path,
    writer: &W,
) -> RunOutcome {
    let mut written = Vec::new();
    let mut failed = Vec::new();
    let mut track = |path: PathBuf, result: Result<()>, failure_message: &str| match result {
        Ok(()) => written.push(path),
        Err(e) => {
            logging::log_error(failure_message, Some(&e));
            failed.push(path);
        }
    };

    let json_path = output_dir.join(files::EXTRACTED_DATA_JSON);
    let result = to_pretty_string(report).and_then(|text| save(writer, &json_path, &text));
    track(json_path, result, "Error saving to JSON");

    if report.tool_executions.is_empty() {
        logging::log_notice(messages::NO_TOOL_EXECUTIONS);
    } else {
        let csv_path = output_dir.join(files::TOOL_EXECUTIONS_CSV);
        let result = report.flat_tool_executions().and_then(|rows| {
            let text = CsvFormatter.format(&files::TOOL_EXECUTIONS_HEADERS, &rows);
            save(writer, &csv_path, &text)
        });
        track(csv_path, result, "Error saving to CSV");
    }

    if !report.sorted_urls.is_empty() {
        let csv_path = output_dir.join(files::URLS_CSV);
        let text = CsvFormatter.format(&files::URLS_HEADERS, &report.sorted_urls);
        let result = save(writer, &csv_path, &text);
        track(csv_path, result, "Error saving to CSV");
    }

    logging::log_saved_files(messages::EXTRACTION_COMPLETE, &written);

    RunOutcome::Completed { written, failed }
}

fn save<W: WriteToFile>(writer: &W, path: &Path, text: &str) -> Result<()> {
    writer.write_to_file(path, text)?;
    Ok(())
}
