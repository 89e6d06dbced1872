//! Check command implementation
//!
//! This module implements the `tipcheck check` command, which:
//! - Loads configuration from tipcheck.toml (if present)
//! - Reads and parses the rule file
//! - Reads each input file, or stdin when no files are given
//! - Builds the report for each input
//! - Formats output (human or JSONL)
//! - Returns an exit code reflecting whether anything matched

use crate::cli::args::GlobalArgs;
use crate::cli::common::{
    EXIT_ERROR, EXIT_MATCHED, EXIT_PARSE_ERROR, EXIT_SUCCESS, Settings, color_choice,
    load_rule_set,
};
use crate::config::OutputFormat;
use crate::error::{ConfigError, SourceError};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::report::Report;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use termcolor::StandardStream;
use tracing::info;

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("Cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What a finished check found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckOutcome {
    Clean,
    Matched,
    NoRules,
}

/// One piece of text to check
struct Input {
    /// Display name, `None` for stdin
    name: Option<String>,
    text: String,
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: No rule matched
/// - 1: At least one rule matched
/// - 2: Error, including an empty rule set
/// - 3: Parse error (invalid tipcheck.toml)
pub fn run_check(global: &GlobalArgs, files: &[PathBuf], format: Option<OutputFormat>) -> i32 {
    match run_check_inner(global, files, format) {
        Ok(CheckOutcome::Clean) => EXIT_SUCCESS,
        Ok(CheckOutcome::Matched) => EXIT_MATCHED,
        Ok(CheckOutcome::NoRules) => EXIT_ERROR,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                CheckError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn run_check_inner(
    global: &GlobalArgs,
    files: &[PathBuf],
    format: Option<OutputFormat>,
) -> Result<CheckOutcome, CheckError> {
    // 1. Resolve config and CLI overrides
    let settings = Settings::load(global, format)?;

    // 2. Load rules before touching inputs so a missing rule file fails fast
    let rule_set = load_rule_set(&settings.rules_path, settings.size_limit)?;
    info!(
        rules = rule_set.len(),
        path = %settings.rules_path.display(),
        "Loaded rules"
    );

    // 3. Read inputs
    let inputs = read_inputs(files)?;

    // 4. Build and print one report per input
    let mut stdout = StandardStream::stdout(color_choice(settings.color));
    let show_headers = inputs.len() > 1;
    let mut outcome = CheckOutcome::Clean;

    for input in &inputs {
        let report = Report::generate(&input.text, &rule_set.rules);

        match settings.format {
            OutputFormat::Human => {
                let formatter = HumanFormatter::new();
                if show_headers && let Some(name) = &input.name {
                    formatter.write_header(&mut stdout, name)?;
                }
                formatter.write(&mut stdout, &report)?;
                if matches!(report, Report::Checked(_)) && !report.has_matches() {
                    eprintln!("No matches found.");
                }
            }
            OutputFormat::Jsonl => {
                let formatter = JsonlFormatter::new();
                let output =
                    formatter.format(&report, input.name.as_deref(), rule_set.rules.len());
                write!(stdout, "{}", output)?;
            }
        }

        outcome = match (&report, outcome) {
            (Report::NoRules, _) => CheckOutcome::NoRules,
            (_, CheckOutcome::NoRules) => CheckOutcome::NoRules,
            (r, _) if r.has_matches() => CheckOutcome::Matched,
            (_, previous) => previous,
        };
    }

    stdout.flush()?;
    Ok(outcome)
}

/// Read every named file, or stdin when none are given
fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>, CheckError> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(vec![Input { name: None, text }]);
    }

    files.iter().map(|path| read_file(path)).collect()
}

fn read_file(path: &Path) -> Result<Input, CheckError> {
    let text = std::fs::read_to_string(path).map_err(|source| CheckError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input {
        name: Some(path.display().to_string()),
        text,
    })
}
