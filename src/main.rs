//! Digraph - directed weighted graph engine CLI
//!
//! Loads a graph from an edge-list file, queries or mutates it, and runs
//! path and acyclicity analyses.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use digraph_core::error::DigraphError;
use digraph_core::logging::{self, LogOptions};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if json_requested(env::args().skip(1)) => {
            return report_json(&usage_error(&err));
        }
        Err(err) => err.exit(),
    };

    let log_options = LogOptions {
        verbose: cli.verbose,
        level: cli.log_level.as_deref(),
        json: cli.log_json,
    };
    if let Err(e) = logging::init_tracing(&log_options) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if cli.format == OutputFormat::Json => report_json(&e),
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_code(&e)
        }
    }
}

/// Map a clap failure onto the engine's error kinds. Help and version
/// requests still print and exit through clap.
fn usage_error(err: &clap::Error) -> DigraphError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => DigraphError::UsageError(err.to_string()),
        _ => DigraphError::Other(err.to_string()),
    }
}

fn report_json(err: &DigraphError) -> ExitCode {
    eprintln!("{}", err.to_json());
    exit_code(err)
}

fn exit_code(err: &DigraphError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}

/// Whether raw arguments ask for `--format json`, for errors raised before
/// clap has produced a `Cli`
fn json_requested(args: impl Iterator<Item = String>) -> bool {
    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.peek().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
