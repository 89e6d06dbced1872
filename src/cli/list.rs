//! List command implementation
//!
//! This module implements the `tipcheck list` command, which shows every rule
//! loaded from the rule file in order, followed by the lines that were
//! skipped and why. Comments and blank lines are not listed.

use crate::cli::args::GlobalArgs;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, Settings, load_rule_set};
use crate::config::OutputFormat;
use crate::error::{ConfigError, SourceError};
use crate::output::{RuleListHumanFormatter, RuleListJsonlFormatter};

/// Error type specific to list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule source unavailable: {0}")]
    Source(#[from] SourceError),
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error (invalid tipcheck.toml)
pub fn run_list(global: &GlobalArgs, format: Option<OutputFormat>) -> i32 {
    match run_list_inner(global, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                ListError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn run_list_inner(global: &GlobalArgs, format: Option<OutputFormat>) -> Result<(), ListError> {
    let settings = Settings::load(global, format)?;
    let rule_set = load_rule_set(&settings.rules_path, settings.size_limit)?;

    match settings.format {
        OutputFormat::Human => RuleListHumanFormatter::new()
            .write_to_stdout(&rule_set, &settings.rules_path.display().to_string()),
        OutputFormat::Jsonl => RuleListJsonlFormatter::new().write_to_stdout(&rule_set),
    }

    Ok(())
}
