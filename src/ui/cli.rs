// Command-line interface definitions and parsing for trace-extractor

use crate::config::CliConfig;
use crate::core::constants::defaults;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reasoning trace (JSON) to extract from
    #[arg(default_value = defaults::INPUT_FILE)]
    pub input: String,

    /// Directory to write the reports to, created if missing
    #[arg(default_value = defaults::OUTPUT_DIR)]
    pub output_dir: String,

    // Ranking
    /// URL ranking keywords (comma-separated)
    #[arg(short = 'k', long, value_name = "WORDS", help_heading = "Ranking")]
    pub keywords: Option<String>,

    // Output & Verbosity
    /// Suppress all diagnostics
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Split a comma-separated list, dropping blank entries
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        keywords: cli
            .keywords
            .as_deref()
            .map(parse_list)
            .filter(|keywords| !keywords.is_empty()),
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
