//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{defaults, urls};
use crate::core::error::{ExtractError, Result};
use crate::reporting::logging;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Keywords used to rank URLs by relevance
    pub keywords: Option<Vec<String>>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ExtractError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and its parents, falling back to defaults.
    ///
    /// A file that exists but cannot be used is reported and skipped.
    pub fn load_from_dir(dir: &Path) -> Self {
        let mut candidate_dir = dir.to_path_buf();
        for _ in 0..=defaults::CONFIG_PARENT_LEVELS {
            let path = candidate_dir.join(defaults::CONFIG_FILE_NAME);
            if path.is_file() {
                match Self::load_from_file(&path) {
                    Ok(config) => return config,
                    Err(e) => logging::log_warning(&format!("Ignoring config file: {e}")),
                }
            }
            candidate_dir.push("..");
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref keywords) = cli_config.keywords {
            self.keywords = Some(keywords.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Ranking keywords, lowercased; the defaults when none are configured
    pub fn keywords(&self) -> Vec<String> {
        match self.keywords {
            Some(ref keywords) => keywords.iter().map(|k| k.trim().to_lowercase()).collect(),
            None => urls::DEFAULT_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref keywords) = self.keywords {
            if keywords.is_empty() {
                return Err(ExtractError::Config(
                    "Keyword list cannot be empty. Remove it to use the defaults.".to_string(),
                ));
            }
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ExtractError::Config(
                    "Keywords cannot be empty strings".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Values taken from the command line
#[derive(Debug, Default, Clone)]
pub struct CliConfig {
    pub keywords: Option<Vec<String>>,
    pub verbose: bool,
    pub quiet: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}
