//! Configuration file parsing and validation

pub mod tipcheck_toml;

pub use tipcheck_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, DEFAULT_RULES_PATH, DEFAULT_UPDATE_URL, OutputConfig,
    OutputFormat, RulesConfig,
};
