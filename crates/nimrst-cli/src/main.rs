//! nimrst - Sphinx RST API reference pages from `nim jsondoc`.
//!
//! Entry point: parses command-line arguments, initializes logging, and
//! dispatches to the requested command.

use std::process::ExitCode;

use clap::Parser;
use nimrst_cli::{cli, commands, logger, ui};

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Partial failures are reported inside the commands and surface as a
    // failure exit code; an Err here is a fatal environment problem.
    match result {
        Ok(code) => code,
        Err(err) => {
            ui::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
