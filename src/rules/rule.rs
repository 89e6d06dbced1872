#![forbid(unsafe_code)]

//! The `Rule` type: one pattern, its tip, and the compiled matcher

use crate::error::RuleError;
use regex::{Regex, RegexBuilder};

/// Default upper bound on the compiled size of a single pattern (10 MiB)
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single `<pattern>,<tip>` rule
///
/// The matcher is always case-insensitive. Matching goes through
/// [`Rule::find_all`], which scans the whole text from the start on every
/// call; the compiled regex carries no position between calls.
#[derive(Clone)]
pub struct Rule {
    pattern: String,
    tip: String,
    matcher: Regex,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("tip", &self.tip)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Compile a rule with the default size limit
    ///
    /// # Errors
    ///
    /// Returns `RuleError::EmptyPattern` if `pattern` is empty and
    /// `RuleError::InvalidRegex` if it does not compile.
    pub fn new(pattern: impl Into<String>, tip: impl Into<String>) -> Result<Self, RuleError> {
        Self::with_size_limit(pattern, tip, DEFAULT_SIZE_LIMIT)
    }

    /// Compile a rule, bounding the compiled program to `size_limit` bytes
    pub fn with_size_limit(
        pattern: impl Into<String>,
        tip: impl Into<String>,
        size_limit: usize,
    ) -> Result<Self, RuleError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RuleError::EmptyPattern);
        }

        let matcher = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map_err(|e| {
                RuleError::InvalidRegex(format!("Failed to compile pattern '{}': {}", pattern, e))
            })?;

        Ok(Rule {
            pattern,
            tip: tip.into(),
            matcher,
        })
    }

    /// The pattern as authored
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The advice shown next to matches
    pub fn tip(&self) -> &str {
        &self.tip
    }

    /// Every non-overlapping match in `text`, in scan order
    pub fn find_all<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.matcher.find_iter(text).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_pattern_and_tip() {
        let rule = Rule::new(r"\bTODO\b", "Remove TODO markers before release").unwrap();
        assert_eq!(rule.pattern(), r"\bTODO\b");
        assert_eq!(rule.tip(), "Remove TODO markers before release");
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert_eq!(Rule::new("", "tip").unwrap_err(), RuleError::EmptyPattern);
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = Rule::new("[unclosed", "tip").unwrap_err();
        assert!(matches!(err, RuleError::InvalidRegex(ref msg) if msg.contains("[unclosed")));
    }

    #[test]
    fn test_lookaround_and_backreference_skipped() {
        for pattern in [r"foo(?=bar)", r"(?<!un)able", r"(\w)\1"] {
            let err = Rule::new(pattern, "tip").unwrap_err();
            assert!(matches!(err, RuleError::InvalidRegex(_)), "{pattern}");
        }
    }

    #[test]
    fn test_size_limit_rejects_large_program() {
        let result = Rule::with_size_limit(r"\w{1000}", "tip", 1024);
        assert!(matches!(result, Err(RuleError::InvalidRegex(_))));
    }

    #[test]
    fn test_find_all_is_case_insensitive() {
        let rule = Rule::new("cat", "feline").unwrap();
        let found: Vec<&str> = rule.find_all("Cat cat CAT dog").collect();
        assert_eq!(found, vec!["Cat", "cat", "CAT"]);
    }

    #[test]
    fn test_find_all_is_non_overlapping() {
        let rule = Rule::new("aa", "tip").unwrap();
        assert_eq!(rule.find_all("aaaaa").count(), 2);
    }

    #[test]
    fn test_find_all_restarts_each_call() {
        let rule = Rule::new("x", "tip").unwrap();
        assert_eq!(rule.find_all("x..x").count(), 2);
        assert_eq!(rule.find_all("x").count(), 1);
        assert_eq!(rule.find_all("x..x").count(), 2);
    }

    #[test]
    fn test_debug_omits_matcher() {
        let rule = Rule::new("a", "b").unwrap();
        let debug = format!("{:?}", rule);
        assert!(debug.contains("pattern: \"a\""));
        assert!(debug.contains("tip: \"b\""));
    }

    #[test]
    fn test_rule_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Rule>();
        assert_sync::<Rule>();
    }
}
