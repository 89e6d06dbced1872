//! CLI argument parsing using clap

use crate::config::{ColorOption, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// tipcheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "tipcheck")]
#[command(about = "Check text against pattern,tip rules and report what matched")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Rule-definition file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Configuration file (defaults to ./tipcheck.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output coloring (overrides the config file)
    #[arg(long, global = true)]
    pub color: Option<ColorOption>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available tipcheck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check text from files (or stdin) against the rules
    Check {
        /// Files to check (reads stdin when omitted)
        files: Vec<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List the loaded rules and any skipped lines
    List {
        /// Output format (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Download the latest rule set and save it to the rules file
    Update {
        /// URL to download from (overrides the config file)
        #[arg(long)]
        url: Option<String>,
    },

    /// Write a starter rules file and configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_default_args() {
        let cli = Cli::parse_from(["tipcheck", "check"]);
        match cli.command {
            Command::Check { files, format } => {
                assert!(files.is_empty());
                assert_eq!(format, None);
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.global.rules, None);
        assert_eq!(cli.global.color, None);
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn test_check_with_files_and_format() {
        let cli = Cli::parse_from(["tipcheck", "check", "a.txt", "b.txt", "-f", "jsonl"]);
        match cli.command {
            Command::Check { files, format } => {
                assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert_eq!(format, Some(OutputFormat::Jsonl));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "tipcheck",
            "check",
            "--rules",
            "custom.cfg",
            "--color",
            "never",
            "-vv",
        ]);
        assert_eq!(cli.global.rules, Some(PathBuf::from("custom.cfg")));
        assert_eq!(cli.global.color, Some(ColorOption::Never));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_list_format() {
        let cli = Cli::parse_from(["tipcheck", "list", "--format", "human"]);
        match cli.command {
            Command::List { format } => assert_eq!(format, Some(OutputFormat::Human)),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_update_url() {
        let cli = Cli::parse_from(["tipcheck", "update", "--url", "https://example.com/r.cfg"]);
        match cli.command {
            Command::Update { url } => {
                assert_eq!(url.as_deref(), Some("https://example.com/r.cfg"));
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::parse_from(["tipcheck", "init", "--force"]);
        match cli.command {
            Command::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Cli::try_parse_from(["tipcheck", "check", "--format", "xml"]);
        assert!(result.is_err());
    }
}
