use clap::Parser;
use trace_extractor::config::{CliConfig, Config};
use trace_extractor::reporting::logging;
use trace_extractor::reporting::{RunOutcome, ensure_output_dir, run};
use trace_extractor::ui::{Cli, cli_to_config};

use std::path::Path;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_extraction(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Main extraction logic extracted from main() for testing
pub fn run_extraction(cli: &Cli) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Started before the config is read so config warnings are shown
    logging::init_logger(cli_config.verbose, cli_config.quiet);

    let config = load_and_merge_config(&cli_config)?;
    logging::set_verbosity(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let output_dir = Path::new(&cli.output_dir);
    ensure_output_dir(output_dir).inspect_err(|e| {
        logging::log_error(
            &format!("Could not create output directory '{}'", output_dir.display()),
            Some(e),
        );
    })?;

    Ok(run(Path::new(&cli.input), output_dir, &config))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
