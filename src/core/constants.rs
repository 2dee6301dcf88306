//! Application-wide constants to avoid magic values throughout the codebase.
//!
//! Field names of the trace format, output file names and CSV headers live
//! here so the extractor, the writer and the tests agree on them.

/// Top-level and per-step field names of a reasoning trace
pub mod fields {
    pub const CHAIN_OF_THOUGHT: &str = "chain_of_thought";
    pub const TOOL_EXECUTIONS: &str = "tool_executions";

    pub const TOOL_NAME: &str = "tool_name";
    pub const METHOD_NAME: &str = "method_name";
    pub const PARAMS: &str = "params";
    pub const OUTPUT: &str = "output";

    pub const LOCATION: &str = "location";
    pub const TIME: &str = "time";
    pub const ERROR: &str = "error";
    pub const OBSERVATION: &str = "observation";

    /// Metadata fields copied from the top level of the trace, in report order
    pub const METADATA: [&str; 4] = [LOCATION, TIME, ERROR, OBSERVATION];
}

/// Output file names and CSV headers
pub mod files {
    /// Combined report
    pub const EXTRACTED_DATA_JSON: &str = "extracted_data.json";
    /// Flattened tool executions
    pub const TOOL_EXECUTIONS_CSV: &str = "tool_executions.csv";
    /// Ranked URLs
    pub const URLS_CSV: &str = "urls.csv";

    pub const TOOL_EXECUTIONS_HEADERS: [&str; 4] = ["tool_name", "method_name", "params", "output"];
    pub const URLS_HEADERS: [&str; 1] = ["url"];
}

/// Command line defaults
pub mod defaults {
    /// Input document used when no path is given
    pub const INPUT_FILE: &str = "input.json";
    /// Output directory used when none is given
    pub const OUTPUT_DIR: &str = ".";
    /// Config file looked up in the current and parent directories
    pub const CONFIG_FILE_NAME: &str = ".trace-extractor.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_PARENT_LEVELS: usize = 3;
    /// Indentation of the pretty-printed JSON report
    pub const JSON_INDENT: &[u8] = b"    ";
}

/// URL discovery and ranking
pub mod urls {
    /// `http://` or `https://` followed by a maximal run of non-whitespace.
    /// The ASCII separators `\x1c`-`\x1f` count as whitespace too.
    pub const URL_PATTERN: &str = r"https?://[^\s\x1c-\x1f]+";

    /// Keywords hinting at maps, travel and listings pages
    pub const DEFAULT_KEYWORDS: [&str; 7] = [
        "maps",
        "flights",
        "hotels",
        "booking",
        "price",
        "search",
        "showtimes",
    ];
}

/// User-facing messages
pub mod messages {
    pub const MISSING_CHAIN_OF_THOUGHT: &str =
        "Warning: 'chain_of_thought' key not found in JSON. Using an empty list.";
    pub const NO_URLS_FOUND: &str = "No URLs were found in the JSON data.";
    pub const NO_TOOL_EXECUTIONS: &str = "No tool execution details found to export.";
    pub const EXTRACTION_COMPLETE: &str = "Data extraction complete. Files saved:";
}
