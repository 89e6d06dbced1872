#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! `check` emits one `match` record per matching rule, in rule order,
//! followed by one `status` record. `list` emits one `rule` record per rule
//! followed by one `skipped` record per skipped line.

use crate::report::Report;
use crate::rules::RuleSet;
use serde::Serialize;

/// JSONL formatter for check reports
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format a report as JSONL, each line newline-terminated
    ///
    /// `file` tags every record with the input it came from.
    pub fn format(&self, report: &Report, file: Option<&str>, rules_checked: usize) -> String {
        let mut output = String::new();

        for m in report.matches() {
            let record = MatchRecord {
                record_type: "match",
                file,
                pattern: &m.pattern,
                tip: &m.tip,
                count: m.count,
                matches: &m.unique,
            };
            push_json(&mut output, &record);
        }

        let status = StatusRecord {
            record_type: "status",
            file,
            rules_loaded: !matches!(report, Report::NoRules),
            rules_checked: rules_checked as u64,
            rules_matched: report.matches().len() as u64,
            total_occurrences: report.total_occurrences() as u64,
        };
        push_json(&mut output, &status);

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL formatter for `tipcheck list`
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    pub fn format(&self, set: &RuleSet) -> String {
        let mut output = String::new();

        for (i, rule) in set.rules.iter().enumerate() {
            let record = RuleRecord {
                record_type: "rule",
                index: i as u64 + 1,
                pattern: rule.pattern(),
                tip: rule.tip(),
            };
            push_json(&mut output, &record);
        }

        for skipped in &set.skipped {
            let record = SkippedRecord {
                record_type: "skipped",
                line: skipped.line as u64,
                text: &skipped.text,
                reason: skipped.reason.as_str(),
            };
            push_json(&mut output, &record);
        }

        output
    }

    pub fn write_to_stdout(&self, set: &RuleSet) {
        print!("{}", self.format(set));
    }
}

impl Default for RuleListJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_json<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

#[derive(Debug, Serialize)]
struct MatchRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    pattern: &'a str,
    tip: &'a str,
    count: usize,
    matches: &'a [String],
}

#[derive(Debug, Serialize)]
struct StatusRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    rules_loaded: bool,
    rules_checked: u64,
    rules_matched: u64,
    total_occurrences: u64,
}

#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: u64,
    pattern: &'a str,
    tip: &'a str,
}

#[derive(Debug, Serialize)]
struct SkippedRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    line: u64,
    text: &'a str,
    reason: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rule, parse_rule_set};
    use serde_json::Value;

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_match_and_status_records() {
        let rules = vec![
            Rule::new("cat", "feline").unwrap(),
            Rule::new("bird", "avian").unwrap(),
        ];
        let report = Report::generate("Cat cat CAT", &rules);
        let records = parse_lines(&JsonlFormatter::new().format(&report, None, rules.len()));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "match");
        assert_eq!(records[0]["pattern"], "cat");
        assert_eq!(records[0]["tip"], "feline");
        assert_eq!(records[0]["count"], 3);
        assert_eq!(records[0]["matches"], serde_json::json!(["Cat"]));
        assert!(records[0].get("file").is_none());

        assert_eq!(records[1]["type"], "status");
        assert_eq!(records[1]["rules_loaded"], true);
        assert_eq!(records[1]["rules_checked"], 2);
        assert_eq!(records[1]["rules_matched"], 1);
        assert_eq!(records[1]["total_occurrences"], 3);
    }

    #[test]
    fn test_no_rules_status() {
        let records = parse_lines(&JsonlFormatter::new().format(&Report::NoRules, None, 0));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["rules_loaded"], false);
        assert_eq!(records[0]["rules_matched"], 0);
    }

    #[test]
    fn test_file_tag() {
        let rules = vec![Rule::new("x", "tip").unwrap()];
        let report = Report::generate("x", &rules);
        let records = parse_lines(&JsonlFormatter::new().format(&report, Some("a.txt"), 1));
        assert!(records.iter().all(|r| r["file"] == "a.txt"));
    }

    #[test]
    fn test_rule_list_records() {
        let set = parse_rule_set("foo,bar\nbroken\n");
        let records = parse_lines(&RuleListJsonlFormatter::new().format(&set));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "rule");
        assert_eq!(records[0]["index"], 1);
        assert_eq!(records[0]["pattern"], "foo");
        assert_eq!(records[0]["tip"], "bar");
        assert_eq!(records[1]["type"], "skipped");
        assert_eq!(records[1]["line"], 2);
        assert_eq!(records[1]["reason"], "missing comma separator");
    }
}
