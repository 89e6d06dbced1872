#![forbid(unsafe_code)]

//! Obtaining rule-definition text
//!
//! The parser and report engine only see plain strings. This module reads
//! that text from a local file, downloads replacement rule sets, and saves
//! them. Any failure here is a [`SourceError`]; the caller reports it and
//! the core is never invoked.

use crate::error::SourceError;
use crate::rules::parse_rule_set_with_limit;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Timeout for downloading a rule set
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Drop one leading UTF-8 byte-order mark, which `str::trim` keeps
fn strip_bom(mut text: String) -> String {
    if text.starts_with('\u{FEFF}') {
        text.drain(..'\u{FEFF}'.len_utf8());
    }
    text
}

/// Something that can produce rule-definition text
pub trait RuleSource {
    /// Human-readable location, used in messages
    fn location(&self) -> String;

    /// Fetch the full rule text
    fn load(&self) -> Result<String, SourceError>;
}

/// Rules stored in a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RuleSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<String, SourceError> {
        debug!(path = %self.path.display(), "Reading rules");
        fs::read_to_string(&self.path)
            .map(strip_bom)
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Rules published at an http(s) URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RuleSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn load(&self) -> Result<String, SourceError> {
        info!(url = %self.url, "Downloading rules");
        let agent = ureq::AgentBuilder::new().timeout(DOWNLOAD_TIMEOUT).build();

        let response = agent.get(&self.url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => {
                SourceError::Http(format!("{} returned status {}", self.url, code))
            }
            other => SourceError::Http(other.to_string()),
        })?;

        response
            .into_string()
            .map(strip_bom)
            .map_err(|e| SourceError::Http(format!("Failed to read response body: {}", e)))
    }
}

/// Write rule text to `path`, replacing any existing file
pub fn save_rules(path: &Path, text: &str) -> Result<(), SourceError> {
    fs::write(path, text).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Download rules from `source` and save them to `dest`
///
/// The downloaded text must contain at least one valid rule; otherwise `dest`
/// is left untouched. Patterns are compiled with the same `size_limit` that
/// `check` will use. Returns the number of rules in the new set.
pub fn update_rules(
    source: &dyn RuleSource,
    dest: &Path,
    size_limit: usize,
) -> Result<usize, SourceError> {
    let text = source.load()?;

    let parsed = parse_rule_set_with_limit(&text, size_limit);
    if parsed.is_empty() {
        return Err(SourceError::Empty(source.location()));
    }

    save_rules(dest, &text)?;
    info!(
        rules = parsed.len(),
        dest = %dest.display(),
        "Saved updated rules"
    );
    Ok(parsed.len())
}
