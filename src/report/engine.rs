#![forbid(unsafe_code)]

//! Report generation
//!
//! Applies each rule to the input text in order and renders one line per rule
//! that matched at least once:
//!
//! ```text
//! "TODO", "todo!" - found 3 occurrences, Remove TODO markers before release
//! ```
//!
//! Rules without matches contribute nothing. When there are no rules at all
//! the report is [`NO_RULES_MESSAGE`] instead, so callers can tell "nothing to
//! check against" apart from "checked, nothing matched" (an empty report).

use crate::rules::Rule;
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

/// Report returned when no rules are available
pub const NO_RULES_MESSAGE: &str = "No valid rules loaded from rules.cfg.";

/// Shown in place of the match list when every match trimmed to nothing
pub const NO_MATCHES_PLACEHOLDER: &str = "(no matches in text)";

/// Matches of a single rule in one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatches {
    pub pattern: String,
    pub tip: String,
    /// Every match, duplicates included
    pub count: usize,
    /// Distinct trimmed matches in order of first appearance
    pub unique: Vec<String>,
}

impl RuleMatches {
    /// Run `rule` over `text`; `None` when it does not match
    pub fn find(rule: &Rule, text: &str) -> Option<Self> {
        let mut count = 0;
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for found in rule.find_all(text) {
            count += 1;
            let trimmed = found.trim();
            if trimmed.is_empty() {
                continue;
            }
            // Case-insensitive identity, first spelling wins
            if seen.insert(trimmed.to_lowercase()) {
                unique.push(trimmed.to_string());
            }
        }

        trace!(pattern = rule.pattern(), count, "Applied rule");

        if count == 0 {
            return None;
        }

        Some(RuleMatches {
            pattern: rule.pattern().to_string(),
            tip: rule.tip().to_string(),
            count,
            unique,
        })
    }

    pub fn occurrence_word(&self) -> &'static str {
        if self.count == 1 {
            "occurrence"
        } else {
            "occurrences"
        }
    }

    /// `"a", "b"`, or the placeholder when nothing survived trimming
    pub fn quoted_matches(&self) -> String {
        if self.unique.is_empty() {
            return NO_MATCHES_PLACEHOLDER.to_string();
        }
        format!("\"{}\"", self.unique.join("\", \""))
    }

    /// The report line for this rule
    pub fn render(&self) -> String {
        format!(
            "{} - found {} {}, {}",
            self.quoted_matches(),
            self.count,
            self.occurrence_word(),
            self.tip
        )
    }
}

/// Outcome of checking one text against a rule list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The rule list was empty
    NoRules,
    /// Rules that matched, in rule order
    Checked(Vec<RuleMatches>),
}

impl Report {
    pub fn generate(text: &str, rules: &[Rule]) -> Self {
        if rules.is_empty() {
            return Report::NoRules;
        }
        Report::Checked(collect_matches(text, rules))
    }

    pub fn matches(&self) -> &[RuleMatches] {
        match self {
            Report::NoRules => &[],
            Report::Checked(matches) => matches,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches().is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.matches().iter().map(|m| m.count).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::NoRules => f.write_str(NO_RULES_MESSAGE),
            Report::Checked(matches) => {
                for (i, m) in matches.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    f.write_str(&m.render())?;
                }
                Ok(())
            }
        }
    }
}

/// Matches for every rule that hit at least once, in rule order
pub fn collect_matches(text: &str, rules: &[Rule]) -> Vec<RuleMatches> {
    rules
        .iter()
        .filter_map(|rule| RuleMatches::find(rule, text))
        .collect()
}

/// Build the report string for `text` against `rules`
pub fn build_report(text: &str, rules: &[Rule]) -> String {
    Report::generate(text, rules).to_string()
}
