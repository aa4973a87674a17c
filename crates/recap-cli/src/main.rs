//! recap CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use recap_cli::cli::Cli;
use recap_cli::export;
use recap_core::tracing::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(config) {
        eprintln!("warning: failed to initialize tracing: {}", e);
    }

    match export::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
