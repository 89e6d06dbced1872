#![forbid(unsafe_code)]

//! Rule-definition text parser
//!
//! Turns `<pattern>,<tip>` lines into an ordered list of [`Rule`]s. The parser
//! never fails: blank lines and `#` comments are ignored, malformed lines are
//! skipped silently, and patterns that do not compile are skipped with a
//! warning.

use crate::error::RuleError;
use crate::rules::{DEFAULT_SIZE_LIMIT, Rule};
use tracing::{debug, warn};

/// Why a non-comment line did not become a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No comma between pattern and tip
    MissingSeparator,
    /// Nothing before the first comma
    EmptyPattern,
    /// Pattern failed to compile; holds the compiler message
    InvalidPattern(String),
}

impl SkipReason {
    pub fn as_str(&self) -> &str {
        match self {
            SkipReason::MissingSeparator => "missing comma separator",
            SkipReason::EmptyPattern => "empty pattern",
            SkipReason::InvalidPattern(message) => message,
        }
    }
}

/// A line that was neither a rule nor a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the rule text
    pub line: usize,
    /// The trimmed line
    pub text: String,
    pub reason: SkipReason,
}

/// Result of parsing rule text: rules in source order plus skipped lines
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    pub skipped: Vec<SkippedLine>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Parse rule-definition text into rules, discarding skip details
pub fn parse_rules(text: &str) -> Vec<Rule> {
    parse_rule_set(text).rules
}

/// Parse rule-definition text, keeping a record of every skipped line
pub fn parse_rule_set(text: &str) -> RuleSet {
    parse_rule_set_with_limit(text, DEFAULT_SIZE_LIMIT)
}

/// Parse rule-definition text with a custom compiled-size limit per pattern
pub fn parse_rule_set_with_limit(text: &str, size_limit: usize) -> RuleSet {
    let mut set = RuleSet::default();

    // `lines` splits on `\n` and drops a trailing `\r`
    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let skip = |reason| SkippedLine {
            line: idx + 1,
            text: trimmed.to_string(),
            reason,
        };

        let Some((pattern, tip)) = trimmed.split_once(',') else {
            set.skipped.push(skip(SkipReason::MissingSeparator));
            continue;
        };

        match Rule::with_size_limit(pattern.trim(), tip.trim(), size_limit) {
            Ok(rule) => set.rules.push(rule),
            Err(RuleError::EmptyPattern) => set.skipped.push(skip(SkipReason::EmptyPattern)),
            Err(RuleError::InvalidRegex(message)) => {
                warn!(pattern = pattern.trim(), "Invalid regex in rules: {}", message);
                set.skipped.push(skip(SkipReason::InvalidPattern(message)));
            }
        }
    }

    debug!(
        rules = set.rules.len(),
        skipped = set.skipped.len(),
        "Parsed rule definitions"
    );

    set
}
