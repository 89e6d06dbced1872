//! Parsing and validation for tipcheck.toml configuration files

use crate::error::ConfigError;
use crate::rules::DEFAULT_SIZE_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the configuration file
pub const CONFIG_FILE_NAME: &str = "tipcheck.toml";

/// Default rule-definition file
pub const DEFAULT_RULES_PATH: &str = "rules.cfg";

/// Where `tipcheck update` downloads rules from unless configured otherwise
pub const DEFAULT_UPDATE_URL: &str =
    "https://raw.githubusercontent.com/shiryay/FileValidator/refs/heads/master/FileValidator/rules.cfg";

/// Main configuration struct for tipcheck.toml
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule source configuration
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "rules.path must not be empty".to_string(),
            ));
        }

        let url = self.rules.update_url.as_str();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "rules.update_url must be an http(s) URL, got '{}'",
                url
            )));
        }

        if self.rules.size_limit == 0 {
            return Err(ConfigError::Validation(
                "rules.size_limit must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// `[rules]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule-definition file
    #[serde(default = "default_rules_path")]
    pub path: PathBuf,

    /// Source for `tipcheck update`
    #[serde(default = "default_update_url")]
    pub update_url: String,

    /// Maximum compiled size of a single pattern, in bytes
    #[serde(default = "default_size_limit")]
    pub size_limit: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            path: default_rules_path(),
            update_url: default_update_url(),
            size_limit: default_size_limit(),
        }
    }
}

fn default_rules_path() -> PathBuf {
    PathBuf::from(DEFAULT_RULES_PATH)
}

fn default_update_url() -> String {
    DEFAULT_UPDATE_URL.to_string()
}

fn default_size_limit() -> usize {
    DEFAULT_SIZE_LIMIT
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
