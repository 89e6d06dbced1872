#![forbid(unsafe_code)]

//! Matching rules against text and rendering the report

pub mod engine;

pub use engine::{
    NO_MATCHES_PLACEHOLDER, NO_RULES_MESSAGE, Report, RuleMatches, build_report, collect_matches,
};
