//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub(crate) mod common;
pub mod init;
pub mod list;
pub mod update;

pub use args::{Cli, Command, GlobalArgs};
pub use common::{EXIT_ERROR, EXIT_MATCHED, EXIT_PARSE_ERROR, EXIT_SUCCESS};
