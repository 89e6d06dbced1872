//! Initialize a tipcheck project
//!
//! Writes a starter rule file and configuration into a directory.

use crate::config::{CONFIG_FILE_NAME, DEFAULT_RULES_PATH};
use std::fs;
use std::path::Path;

/// Default content for rules.cfg
pub(crate) const DEFAULT_RULES_CFG: &str = r"# tipcheck rules
#
# One rule per line: <pattern>,<tip>
# Patterns are regular expressions matched case-insensitively.
# Only the first comma separates the pattern from the tip, so tips may
# contain commas but patterns may not.
# Lines starting with # are comments.

\bTODO\b,Remove TODO markers before release
\bFIXME\b,Resolve FIXME notes before release
[ ][ ]+,Collapse repeated spaces into one
\s+[.;:!?],Remove the space before punctuation
\b(very|really|basically)\b,Consider dropping the intensifier
";

/// Default content for tipcheck.toml
pub(crate) const DEFAULT_CONFIG_TOML: &str = r#"[rules]
# Rule-definition file, relative to the working directory
path = "rules.cfg"

# Where `tipcheck update` downloads rules from
# update_url = "https://example.com/rules.cfg"

# Maximum compiled size of a single pattern, in bytes
# size_limit = 10485760

[output]
format = "human"
color = "auto"
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// Result of init command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitResult {
    /// Files that were created
    pub created: Vec<String>,
    /// Files that were skipped (already existed)
    pub skipped: Vec<String>,
    /// Files that were overwritten
    pub overwritten: Vec<String>,
}

/// Run the init command in `dir`
///
/// Creates rules.cfg and tipcheck.toml. Existing files are skipped unless
/// `force` is set.
pub fn run_init(dir: &Path, force: bool) -> Result<InitResult, InitError> {
    if !dir.is_dir() {
        return Err(InitError::Path(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut result = InitResult::default();

    handle_file(dir, DEFAULT_RULES_PATH, DEFAULT_RULES_CFG, force, &mut result)?;
    handle_file(dir, CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML, force, &mut result)?;

    Ok(result)
}

/// Handle creation of a single file
fn handle_file(
    dir: &Path,
    name: &str,
    content: &str,
    force: bool,
    result: &mut InitResult,
) -> Result<(), InitError> {
    let path = dir.join(name);

    if path.exists() {
        if force {
            fs::write(&path, content)?;
            result.overwritten.push(name.to_string());
        } else {
            result.skipped.push(name.to_string());
        }
    } else {
        fs::write(&path, content)?;
        result.created.push(name.to_string());
    }

    Ok(())
}

/// Print a summary of an init run
pub fn print_summary(result: &InitResult) {
    for name in &result.created {
        println!("Created {}", name);
    }
    for name in &result.overwritten {
        println!("Overwrote {}", name);
    }
    for name in &result.skipped {
        println!("Skipped {} (already exists, use --force to overwrite)", name);
    }
}
