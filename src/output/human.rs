#![forbid(unsafe_code)]

//! Human-readable output
//!
//! Report lines are written exactly as [`Report`]'s `Display` renders them.
//! Colour only decorates the text, it never changes it.

use crate::report::{Report, RuleMatches};
use crate::rules::RuleSet;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human formatter for check reports
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report followed by a newline; nothing when no rule matched
    pub fn write(&self, out: &mut dyn WriteColor, report: &Report) -> io::Result<()> {
        match report {
            Report::NoRules => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(out, "{}", report)?;
                out.reset()?;
                writeln!(out)
            }
            Report::Checked(matches) => {
                for m in matches {
                    write_line(out, m)?;
                }
                Ok(())
            }
        }
    }

    /// Header separating reports when several inputs are checked
    pub fn write_header(&self, out: &mut dyn WriteColor, name: &str) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "==> {} <==", name)?;
        out.reset()?;
        writeln!(out)
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_line(out: &mut dyn WriteColor, m: &RuleMatches) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", m.quoted_matches())?;
    out.reset()?;
    write!(out, " - found {} {}, ", m.count, m.occurrence_word())?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{}", m.tip)?;
    out.reset()?;
    writeln!(out)
}

/// Human formatter for `tipcheck list`
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    pub fn format(&self, set: &RuleSet, location: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Rules ({} loaded from {}):\n",
            set.rules.len(),
            location
        ));

        if set.rules.is_empty() {
            output.push_str("  (none)\n");
        }

        for (i, rule) in set.rules.iter().enumerate() {
            output.push_str(&format!("  {:>3}. {}\n", i + 1, rule.pattern()));
            output.push_str(&format!("       {}\n", rule.tip()));
        }

        if !set.skipped.is_empty() {
            output.push('\n');
            output.push_str(&format!("Skipped lines ({}):\n", set.skipped.len()));
            for skipped in &set.skipped {
                output.push_str(&format!(
                    "  line {}: {}\n       {}\n",
                    skipped.line,
                    skipped.text,
                    skipped.reason.as_str()
                ));
            }
        }

        output
    }

    pub fn write_to_stdout(&self, set: &RuleSet, location: &str) {
        print!("{}", self.format(set, location));
    }
}

impl Default for RuleListHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rule, parse_rule_set};
    use termcolor::{Ansi, NoColor};

    fn render(report: &Report) -> String {
        let mut out = NoColor::new(Vec::new());
        HumanFormatter::new().write(&mut out, report).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_write_matches_report_text() {
        let rules = vec![
            Rule::new("cat", "feline").unwrap(),
            Rule::new("dog", "canine").unwrap(),
        ];
        let report = Report::generate("Cat dog cat", &rules);
        assert_eq!(render(&report), format!("{}\n", report));
    }

    #[test]
    fn test_write_no_rules() {
        assert_eq!(
            render(&Report::NoRules),
            "No valid rules loaded from rules.cfg.\n"
        );
    }

    #[test]
    fn test_write_nothing_when_clean() {
        let rules = vec![Rule::new("cat", "feline").unwrap()];
        assert_eq!(render(&Report::generate("dog", &rules)), "");
    }

    #[test]
    fn test_color_output_contains_escape_codes() {
        let rules = vec![Rule::new("cat", "feline").unwrap()];
        let report = Report::generate("cat", &rules);

        let mut out = Ansi::new(Vec::new());
        HumanFormatter::new().write(&mut out, &report).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();

        assert!(text.contains("\x1b["));
        assert!(text.contains("feline"));
    }

    #[test]
    fn test_header() {
        let mut out = NoColor::new(Vec::new());
        HumanFormatter::new()
            .write_header(&mut out, "notes.txt")
            .unwrap();
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "==> notes.txt <==\n"
        );
    }

    #[test]
    fn test_rule_list_format() {
        let set = parse_rule_set("# comment\nfoo,use bar\nno comma\n[bad,broken");
        let output = RuleListHumanFormatter::new().format(&set, "rules.cfg");

        assert!(output.starts_with("Rules (1 loaded from rules.cfg):\n"));
        assert!(output.contains("    1. foo\n       use bar\n"));
        assert!(output.contains("Skipped lines (2):"));
        assert!(output.contains("line 3: no comma\n       missing comma separator"));
        assert!(output.contains("line 4: [bad,broken"));
    }

    #[test]
    fn test_rule_list_empty() {
        let set = parse_rule_set("");
        let output = RuleListHumanFormatter::new().format(&set, "rules.cfg");
        assert_eq!(output, "Rules (0 loaded from rules.cfg):\n  (none)\n");
    }
}
