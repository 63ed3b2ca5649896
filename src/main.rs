//! CLI entry point for tile floor pattern planning

use clap::Parser;
use std::process::ExitCode;
use tilefloor::io::cli::{Cli, CommandRunner};
use tilefloor::io::configuration::{DEFAULT_LOG_FILTER, verbose_log_filter};
use tracing_subscriber::EnvFilter;

// Allow print for the one-line failure message
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut runner = CommandRunner::new(cli);
    let mut out = std::io::stdout().lock();
    match runner.run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

// An explicit -v wins over RUST_LOG
fn init_logging(verbosity: u8) {
    let filter = verbose_log_filter(verbosity).map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        EnvFilter::new,
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
