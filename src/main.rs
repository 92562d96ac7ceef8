//! `coachwatch` - fixed-camera coaching violation detector

use std::error::Error as _;

use clap::Parser;

use coachwatch::cli::args::Cli;
use coachwatch::cli::commands;
use coachwatch::error::ExitCode;
use coachwatch::observability::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too and are not failures.
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            std::process::exit(code);
        }
    };

    if !cli.quiet {
        init_logging(cli.verbose);
    }

    match commands::dispatch(&cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            eprintln!("{e:#?}");
            std::process::exit(e.exit_code());
        }
    }
}
