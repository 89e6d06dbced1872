//! Update command implementation
//!
//! Downloads a rule set and replaces the local rule file with it. A download
//! that contains no valid rules (an error page, an empty body) is rejected and
//! the existing file is kept.

use crate::cli::args::GlobalArgs;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS, Settings};
use crate::error::{ConfigError, SourceError};
use crate::source::{HttpSource, RuleSource, update_rules};

/// Error type specific to update command
#[derive(Debug, thiserror::Error)]
enum UpdateError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to update rules: {0}")]
    Source(#[from] SourceError),
}

/// Run the update command
///
/// # Returns
///
/// Exit code:
/// - 0: Rules saved
/// - 2: Download or write failed
/// - 3: Parse error (invalid tipcheck.toml)
pub fn run_update(global: &GlobalArgs, url: Option<&str>) -> i32 {
    match run_update_inner(global, url) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                UpdateError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn run_update_inner(global: &GlobalArgs, url: Option<&str>) -> Result<(), UpdateError> {
    let settings = Settings::load(global, None)?;
    let source = HttpSource::new(url.unwrap_or(&settings.update_url));

    let count = update_rules(&source, &settings.rules_path, settings.size_limit)?;
    println!(
        "Saved {} rules from {} to {}",
        count,
        source.location(),
        settings.rules_path.display()
    );

    Ok(())
}
