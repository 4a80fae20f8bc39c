//! Gradebook binary entry point.

use clap::Parser;
use gradebook::cli::{Cli, run};
use gradebook::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.tracing_quiet());

    let mut out = std::io::stdout();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
