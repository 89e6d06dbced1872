#![forbid(unsafe_code)]

//! tipcheck: scan text against `<pattern>,<tip>` rules
//!
//! Rule text is parsed into an ordered list of case-insensitive regex rules,
//! then each rule is applied to the input and every rule that matched gets one
//! report line listing the distinct matches, the total count, and its tip.
//!
//! ```
//! let rules = tipcheck::parse_rules("cat,feline\ndog,canine");
//! let report = tipcheck::build_report("Cat cat CAT", &rules);
//! assert_eq!(report, "\"Cat\" - found 3 occurrences, feline");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod rules;
pub mod source;

// Re-export error types for convenient access
pub use error::{ConfigError, RuleError, SourceError, TipcheckError};

// Re-export the core entry points
pub use report::{NO_MATCHES_PLACEHOLDER, NO_RULES_MESSAGE, Report, RuleMatches, build_report};
pub use rules::{Rule, RuleSet, parse_rule_set, parse_rules};
