//! tipcheck CLI entry point

use clap::Parser;
use std::path::Path;
use std::process;
use tipcheck::cli::{Cli, Command, EXIT_ERROR, EXIT_SUCCESS};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.global.verbose);

    let exit_code = match cli.command {
        Command::Check { files, format } => {
            tipcheck::cli::check::run_check(&cli.global, &files, format)
        }
        Command::List { format } => tipcheck::cli::list::run_list(&cli.global, format),
        Command::Update { url } => tipcheck::cli::update::run_update(&cli.global, url.as_deref()),
        Command::Init { force } => match tipcheck::cli::init::run_init(Path::new("."), force) {
            Ok(result) => {
                tipcheck::cli::init::print_summary(&result);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
