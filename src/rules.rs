#![forbid(unsafe_code)]

//! Rule definitions and the rule-text parser

pub mod parser;
mod rule;

pub use parser::{
    RuleSet, SkipReason, SkippedLine, parse_rule_set, parse_rule_set_with_limit, parse_rules,
};
pub use rule::{DEFAULT_SIZE_LIMIT, Rule};
