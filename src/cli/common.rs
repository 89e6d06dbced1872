//! Common helper functions shared across CLI commands
//!
//! Resolves configuration and CLI overrides into the settings each command
//! runs with, and loads the rule set from its file.

use crate::cli::args::GlobalArgs;
use crate::config::{CONFIG_FILE_NAME, ColorOption, Config, OutputFormat};
use crate::error::{ConfigError, SourceError};
use crate::rules::{RuleSet, parse_rule_set_with_limit};
use crate::source::{FileSource, RuleSource};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_MATCHED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load configuration
///
/// An explicit `--config` path must exist. Without one, `tipcheck.toml` in
/// the current directory is used when present and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse`/`ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            if default_path.exists() {
                Config::load(default_path)
            } else {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Config::default())
            }
        }
    }
}

/// Settings after applying CLI overrides on top of the config file
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub rules_path: PathBuf,
    pub update_url: String,
    pub size_limit: usize,
    pub format: OutputFormat,
    pub color: ColorOption,
}

impl Settings {
    pub(crate) fn resolve(
        global: &GlobalArgs,
        config: &Config,
        format: Option<OutputFormat>,
    ) -> Self {
        Settings {
            rules_path: global
                .rules
                .clone()
                .unwrap_or_else(|| config.rules.path.clone()),
            update_url: config.rules.update_url.clone(),
            size_limit: config.rules.size_limit,
            format: format.unwrap_or(config.output.format),
            color: global.color.unwrap_or(config.output.color),
        }
    }

    /// Load configuration and resolve settings in one step
    pub(crate) fn load(
        global: &GlobalArgs,
        format: Option<OutputFormat>,
    ) -> Result<Self, ConfigError> {
        let config = load_config(global.config.as_deref())?;
        Ok(Self::resolve(global, &config, format))
    }
}

/// Read and parse the rule file
///
/// The file is re-read on every call so edits take effect immediately.
pub(crate) fn load_rule_set(path: &Path, size_limit: usize) -> Result<RuleSet, SourceError> {
    let text = FileSource::new(path).load()?;
    Ok(parse_rule_set_with_limit(&text, size_limit))
}

/// Map the configured color option onto termcolor for stdout
pub(crate) fn color_choice(option: ColorOption) -> termcolor::ColorChoice {
    match option {
        ColorOption::Always => termcolor::ColorChoice::Always,
        ColorOption::Never => termcolor::ColorChoice::Never,
        ColorOption::Auto => {
            if std::io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}
