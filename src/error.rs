//! Error types for tipcheck
//!
//! Rule text problems never surface as errors from the parser: a bad line is
//! skipped and recorded. The types here cover compiling a single rule,
//! obtaining rule text from a source, and loading configuration.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Pattern was empty after trimming
    #[error("Empty pattern")]
    EmptyPattern,

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// Failure to obtain rule-definition text
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Rule file could not be read or written
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Remote rule set could not be downloaded
    #[error("Download failed: {0}")]
    Http(String),

    /// Downloaded rule set contains no usable rules
    #[error("Rule set from {0} contains no valid rules")]
    Empty(String),
}

/// Top-level error type for tipcheck
#[derive(Debug, thiserror::Error)]
pub enum TipcheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Rule source unavailable
    #[error("Rule source unavailable: {0}")]
    Source(#[from] SourceError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display_names_path() {
        let err = SourceError::Io {
            path: PathBuf::from("rules.cfg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Cannot access rules.cfg: not found");
    }

    #[test]
    fn test_top_level_wraps_source_error() {
        let err: TipcheckError = SourceError::Http("status 404".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Rule source unavailable: Download failed: status 404"
        );
    }
}
