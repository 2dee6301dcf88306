use crate::config::Config;
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
///
/// Diagnostics are user-facing, so they go to stdout as plain lines.
/// `RUST_LOG` applies unless `--verbose` or `--quiet` was given.
pub fn init_logger(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if !env_filter_applies(verbose, quiet) {
        // Most verbose level the run may need; `set_verbosity` narrows it
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    set_verbosity(verbose, quiet);
}

/// Adjust the level of an initialized logger, e.g. once the config file
/// has been read.
pub fn set_verbosity(verbose: bool, quiet: bool) {
    if env_filter_applies(verbose, quiet) {
        return;
    }

    let level = level_for(verbose, quiet);
    log::set_max_level(level);
    debug!("Logger level: {level:?}");
}

fn level_for(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

fn env_filter_applies(verbose: bool, quiet: bool) -> bool {
    !verbose && !quiet && std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some()
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    debug!("Configuration: keywords={}", config.keywords().join(","));
}

/// Log a parsed input document
pub fn log_document_loaded(path: &Path, bytes: usize) {
    debug!("Loaded {} ({bytes} bytes)", path.display());
}

/// Log URL discovery information
pub fn log_url_discovery(unique_urls: usize, total_found: usize) {
    debug!("Found {unique_urls} unique URLs (from {total_found} total)");
}

/// Log the tool executions found in one step
pub fn log_step_executions(step: usize, executions: usize) {
    debug!("Step {step}: {executions} tool execution(s)");
}

/// Log a part of the trace that was ignored because of its shape
pub fn log_skipped(what: &str, reason: &str) {
    debug!("Skipping {what}: {reason}");
}

/// Log extraction totals before the reports are written
pub fn log_extraction_summary(steps: usize, tool_executions: usize, urls: usize) {
    debug!("Extracted {steps} step(s), {tool_executions} tool execution(s), {urls} URL(s)");
}

/// Log a report file that was written
pub fn log_file_written(path: &Path, bytes: usize) {
    debug!("Wrote {} ({bytes} bytes)", path.display());
}

/// Log the files a run produced
pub fn log_saved_files<P: AsRef<Path>>(heading: &str, files: &[P]) {
    info!("{heading}");
    for file in files {
        info!("  - {}", file.as_ref().display());
    }
}

/// Log a notice for the user
pub fn log_notice(message: &str) {
    info!("{message}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
