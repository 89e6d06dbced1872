//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;

pub use human::{HumanFormatter, RuleListHumanFormatter};
pub use jsonl::{JsonlFormatter, RuleListJsonlFormatter};
