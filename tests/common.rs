//! Test utilities for tipcheck integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tipcheck::Rule;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Rule text shared by several test files
pub const SAMPLE_RULES: &str = r"# sample rules
\bTODO\b,Remove TODO markers before release
colou?r,Pick one spelling, and stick to it
[unclosed,This line never loads
no separator on this line
\bcat\b,feline
";

/// Compile rules from `<pattern>,<tip>` text
pub fn rules(text: &str) -> Vec<Rule> {
    tipcheck::parse_rules(text)
}

/// Write `text` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap_or_else(|e| panic!("Failed to write {}: {}", name, e));
    path
}
